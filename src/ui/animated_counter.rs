//! Count-up statistic that starts when scrolled into view

use leptos::html::Span;
use leptos::prelude::*;

use crate::core::animation::DEFAULT_DURATION_MS;
use crate::core::visibility::VisibilityOptions;
use crate::ui::in_view::use_in_view;

#[cfg(not(feature = "ssr"))]
use crate::core::animation::CounterAnimation;
#[cfg(not(feature = "ssr"))]
use crate::ui::frame_loop::use_frame_counter;

/// Renders `{value}{suffix}`, counting from 0 to `end` the first time the
/// number becomes visible. Each counter owns its trigger and frame loop.
#[component]
pub fn AnimatedCounter(
    /// Final value
    end: u64,
    /// Animation length in milliseconds
    #[prop(default = DEFAULT_DURATION_MS)]
    duration: f64,
    /// Text after the number, e.g. `+` or `%`
    #[prop(default = "")]
    suffix: &'static str,
) -> impl IntoView {
    let (node_ref, in_view) = use_in_view::<Span>(VisibilityOptions::default());
    let value = RwSignal::new(0u64);

    #[cfg(not(feature = "ssr"))]
    {
        let counter = use_frame_counter(CounterAnimation::with_duration(end, duration), value);
        Effect::new(move |_| {
            if in_view.get() {
                counter.start();
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (end, duration, in_view);

    view! {
        <span node_ref=node_ref>{move || value.get()}{suffix}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_starts_at_zero() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <AnimatedCounter end=2500 suffix="+" /> }.to_html());

        assert!(html.starts_with("<span"));
        assert!(html.contains('0'));
        assert!(html.contains('+'));
        assert!(!html.contains("2500"));
    }
}

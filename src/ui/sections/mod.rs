//! Page sections, top to bottom

mod about;
mod contact;
mod hero;
mod sectors;
mod services;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use sectors::Sectors;
pub use services::Services;

use leptos::prelude::*;

use crate::ui::theme::use_theme_context;

/// Class list for an element that animates in once its block is revealed
pub(crate) fn reveal_class(revealed: bool, animation: &str, base: &str) -> String {
    if revealed {
        format!("{base} {animation}")
    } else {
        format!("{base} opacity-0")
    }
}

/// Badge, heading and lead paragraph shared by the content sections
#[component]
pub(crate) fn SectionHeader(
    badge: &'static str,
    /// Heading text before the highlighted words
    lead: &'static str,
    highlight: &'static str,
    /// Heading text after the highlighted words
    #[prop(default = "")]
    tail: &'static str,
    description: &'static str,
    revealed: Signal<bool>,
) -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <div class="text-center mb-12 sm:mb-16">
            <span class=move || {
                format!(
                    "inline-block px-4 py-1.5 rounded-full text-sm font-medium mb-4 {}",
                    theme.palette().badge
                )
            }>{badge}</span>
            <h2 class=move || {
                reveal_class(revealed.get(), "animate-fade-up", "text-3xl sm:text-4xl md:text-5xl font-bold mb-4")
            }>
                {lead}" "<span class=move || theme.palette().gradient_text>{highlight}</span>" "{tail}
            </h2>
            <p class=move || {
                reveal_class(
                    revealed.get(),
                    "animate-fade-up animate-delay-100",
                    &format!("{} max-w-2xl mx-auto text-sm sm:text-base", theme.palette().text_muted),
                )
            }>{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false, "animate-fade-up", "p-4"), "p-4 opacity-0");
        assert_eq!(reveal_class(true, "animate-fade-up", "p-4"), "p-4 animate-fade-up");
    }
}

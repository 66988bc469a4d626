use leptos::html::Div;
use leptos::prelude::*;

use super::{SectionHeader, reveal_class};
use crate::core::content::{SERVICES, Service};
use crate::core::visibility::VisibilityOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::theme::use_theme_context;

#[component]
fn ServiceCard(service: Service, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <div
            class=move || {
                let palette = theme.palette();
                reveal_class(
                    revealed.get(),
                    "animate-fade-up",
                    &format!(
                        "group p-4 sm:p-6 {} rounded-2xl border {} hover:border-red-500/30 transition-all duration-300 card-hover",
                        palette.bg_card,
                        palette.border_light
                    ),
                )
            }
            style=format!("animation-delay: {:.2}s", (index + 2) as f64 * 0.05)
        >
            <div class="w-12 h-12 sm:w-14 sm:h-14 btn-gradient rounded-xl flex items-center justify-center mb-4 group-hover:scale-110 transition-transform shadow-lg text-white">
                <Icon name=service.icon class="w-7 h-7" />
            </div>
            <h3 class="text-base sm:text-lg font-semibold mb-2">{service.title}</h3>
            <p class=move || format!("{} text-xs sm:text-sm mb-4", theme.palette().text_muted)>{service.desc}</p>
            <ul class="space-y-1.5 sm:space-y-2">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class=move || format!("flex items-center gap-2 text-xs sm:text-sm {}", theme.palette().text_muted)>
                                <Icon name=icons::CHECK_CIRCLE class="w-3.5 h-3.5 sm:w-4 sm:h-4 text-red-500 flex-shrink-0" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let theme = use_theme_context();
    let (node_ref, revealed) = use_in_view::<Div>(VisibilityOptions::default());

    view! {
        <section id="services" class=move || format!("py-16 sm:py-24 {}", theme.palette().bg)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div node_ref=node_ref>
                    <SectionHeader
                        badge="Our Services"
                        lead="Complete"
                        highlight="Electrical"
                        tail="Solutions"
                        description="From basic repairs to complete electrical installations, we've got all your needs covered."
                        revealed=revealed
                    />

                    <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6">
                        {SERVICES
                            .iter()
                            .enumerate()
                            .map(|(index, service)| view! { <ServiceCard service=*service index=index revealed=revealed /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::provide_theme_context;

    #[test]
    fn test_every_service_is_rendered() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_theme_context();
            view! { <Services /> }.to_html()
        });

        assert!(html.contains(r#"id="services""#));
        for service in SERVICES.iter() {
            assert!(html.contains(&service.title.replace('&', "&amp;")));
            for feature in service.features {
                assert!(html.contains(feature));
            }
        }
        // Hidden until scrolled into view
        assert!(html.contains("opacity-0"));
    }
}

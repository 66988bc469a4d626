use leptos::html::Div;
use leptos::prelude::*;

use super::{SectionHeader, reveal_class};
use crate::core::content::BUSINESS;
use crate::core::visibility::VisibilityOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::theme::use_theme_context;

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme_context();
    let is_dark = theme.is_dark;
    let (node_ref, revealed) = use_in_view::<Div>(VisibilityOptions::default());

    view! {
        <section id="contact" class=move || format!("py-16 sm:py-24 {}", theme.palette().bg)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div node_ref=node_ref>
                    <SectionHeader
                        badge="Contact Us"
                        lead="Get Your"
                        highlight="Free Quote"
                        description="Ready to start your project? Contact us today for a free consultation and quote."
                        revealed=revealed
                    />

                    <div class=move || reveal_class(revealed.get(), "animate-fade-up animate-delay-200", "max-w-lg mx-auto")>
                        <a
                            href=BUSINESS.tel_uri()
                            class=move || {
                                let palette = theme.palette();
                                format!(
                                    "block p-6 sm:p-8 {} rounded-3xl border {} shadow-xl hover:shadow-2xl transition-all duration-300 card-hover",
                                    palette.bg_card,
                                    palette.border_light
                                )
                            }
                        >
                            <div class="flex flex-col items-center text-center">
                                <div class="w-20 h-20 sm:w-24 sm:h-24 btn-gradient rounded-2xl flex items-center justify-center mb-6 shadow-lg glow-red">
                                    <Icon name=icons::PHONE class="w-10 h-10 sm:w-12 sm:h-12 text-white" />
                                </div>
                                <h3 class=move || format!("text-2xl sm:text-3xl font-bold {} mb-2", theme.palette().text)>
                                    "Call Us Now"
                                </h3>
                                <p class="text-3xl sm:text-4xl font-bold text-red-500 mb-3">{BUSINESS.phone}</p>
                                <p class=move || format!("text-sm {}", theme.palette().text_muted)>
                                    "24/7 Emergency Line Available"
                                </p>

                                <div class=move || {
                                    if is_dark.get() {
                                        "mt-6 w-full p-4 bg-red-900/30 rounded-xl border border-red-800/50"
                                    } else {
                                        "mt-6 w-full p-4 bg-red-50 rounded-xl border border-red-200"
                                    }
                                }>
                                    <div class="flex items-center justify-center gap-2">
                                        <Icon name=icons::CLOCK class="w-5 h-5 text-red-500" />
                                        <span class=move || {
                                            let color = if is_dark.get() { "text-red-300" } else { "text-red-700" };
                                            format!("text-sm font-medium {color}")
                                        }>"Available 24 hours, 7 days a week"</span>
                                    </div>
                                </div>
                            </div>
                        </a>

                        <a
                            href=BUSINESS.whatsapp_uri()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=move || {
                                let palette = theme.palette();
                                format!(
                                    "flex items-center justify-center gap-3 mt-6 p-4 {} rounded-xl border {} hover:border-green-500/50 transition-all group",
                                    palette.bg_card,
                                    palette.border_light
                                )
                            }
                        >
                            <div class="w-10 h-10 bg-green-500 rounded-xl flex items-center justify-center group-hover:scale-110 transition-transform">
                                <Icon name=icons::WHATSAPP class="w-6 h-6 text-white" />
                            </div>
                            <span class=move || format!("font-medium {}", theme.palette().text)>
                                "Or message us on WhatsApp"
                            </span>
                        </a>
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
    fn test_contact_ctas() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_theme_context();
            view! { <Contact /> }.to_html()
        });

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"href="tel:+6591234567""#));
        assert!(html.contains(r#"href="https://wa.me/6591234567""#));
        assert!(html.contains("+65 9123 4567"));
    }
}

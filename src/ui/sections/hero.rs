use leptos::prelude::*;

use crate::core::content::{BUSINESS, HERO_STATS};
use crate::ui::animated_counter::AnimatedCounter;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll_tracker::scroll_to_section;
use crate::ui::theme::use_theme_context;

const HERO_BADGES: [(&str, &str); 3] = [
    (icons::SHIELD, "EMA Licensed"),
    (icons::AWARD, "BCA Registered"),
    (icons::CLOCK, "24/7 Emergency"),
];

/// Accessible description of the hero artwork.
///
/// The artwork is an icon composition until a photo ships in `public/`;
/// a real `<img>` should carry this same text as its `alt`.
fn hero_image_alt() -> String {
    format!("{} - Professional electrician at work in Singapore", BUSINESS.name)
}

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme_context();
    let is_dark = theme.is_dark;

    view! {
        <section
            id="home"
            class=move || {
                let pattern = if is_dark.get() { "hero-pattern-dark" } else { "hero-pattern-light" };
                format!("relative min-h-screen flex items-center justify-center overflow-hidden {pattern}")
            }
        >
            <div class=move || {
                if is_dark.get() {
                    "absolute inset-0 bg-gradient-to-br from-gray-950 via-gray-900 to-red-950/30"
                } else {
                    "absolute inset-0 bg-gradient-to-br from-red-50 via-white to-orange-50"
                }
            }></div>
            <div class=move || {
                let color = if is_dark.get() { "bg-red-600" } else { "bg-red-400" };
                format!("absolute top-20 right-0 w-72 sm:w-96 h-72 sm:h-96 {color} rounded-full blur-3xl opacity-20")
            }></div>
            <div class=move || {
                let color = if is_dark.get() { "bg-orange-600" } else { "bg-orange-400" };
                format!("absolute bottom-20 left-0 w-64 sm:w-80 h-64 sm:h-80 {color} rounded-full blur-3xl opacity-20")
            }></div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 pt-24 sm:pt-32 pb-12">
                <div class="grid lg:grid-cols-2 gap-8 lg:gap-16 items-center">
                    <div class="text-center lg:text-left">
                        <div class="animate-fade-up">
                            <span class=move || {
                                format!(
                                    "inline-flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium mb-6 {}",
                                    theme.palette().badge
                                )
                            }>
                                <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></span>
                                "EMA Licensed Electricians in Singapore"
                            </span>
                        </div>

                        <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-extrabold leading-tight mb-6 animate-fade-up animate-delay-100">
                            <span class=move || theme.palette().text>"Your Trusted"</span>
                            <br />
                            <span class=move || theme.palette().gradient_text>"Electrical"</span>
                            <br />
                            <span class=move || theme.palette().text>"Experts"</span>
                        </h1>

                        <p class=move || {
                            format!(
                                "text-base sm:text-lg md:text-xl {} mb-8 max-w-lg mx-auto lg:mx-0 animate-fade-up animate-delay-200",
                                theme.palette().text_muted
                            )
                        }>
                            "Professional electrical services for HDB, condos, landed properties, and commercial spaces. Quality work, fair pricing, and 24/7 emergency support."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start animate-fade-up animate-delay-300">
                            <button
                                class="group flex items-center justify-center gap-2 px-6 sm:px-8 py-3 sm:py-4 btn-gradient text-white font-semibold rounded-xl shadow-lg glow-red"
                                on:click=move |_| scroll_to_section("contact")
                            >
                                "Get Free Quote"
                                <Icon name=icons::ARROW_RIGHT class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                            </button>
                            <button
                                class=move || {
                                    format!(
                                        "flex items-center justify-center gap-2 px-6 sm:px-8 py-3 sm:py-4 {} border-2 border-red-600 text-red-500 font-semibold rounded-xl hover:bg-red-600 hover:text-white transition-all",
                                        theme.palette().bg_card
                                    )
                                }
                                on:click=move |_| scroll_to_section("services")
                            >
                                "Our Services"
                                <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                            </button>
                        </div>

                        <div class="flex flex-wrap items-center justify-center lg:justify-start gap-4 sm:gap-6 mt-10 sm:mt-12 animate-fade-up">
                            {HERO_BADGES
                                .into_iter()
                                .map(|(icon, label)| {
                                    view! {
                                        <div class=move || {
                                            let palette = theme.palette();
                                            format!(
                                                "flex items-center gap-2 {} px-4 py-2 rounded-full shadow-md border {}",
                                                palette.bg_card,
                                                palette.border_light
                                            )
                                        }>
                                            <Icon name=icon class="w-5 h-5 text-red-500" />
                                            <span class=move || format!("text-sm {} font-medium", theme.palette().text)>
                                                {label}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative animate-fade-up animate-delay-300 mt-8 lg:mt-0">
                        <div class="relative w-full aspect-square max-w-md mx-auto lg:max-w-none">
                            <div class="absolute inset-4 sm:inset-8 bg-gradient-to-br from-red-600 to-orange-500 rounded-3xl transform rotate-6"></div>
                            <div
                                class=move || {
                                    format!(
                                        "relative {} rounded-3xl overflow-hidden shadow-2xl h-[500px] flex items-center justify-center",
                                        theme.palette().bg_card
                                    )
                                }
                                role="img"
                                aria-label=hero_image_alt()
                            >
                                <div class="w-40 h-40 btn-gradient rounded-full flex items-center justify-center glow-red">
                                    <Icon name=icons::ZAP class="w-20 h-20 text-white" />
                                </div>
                            </div>
                            <div class=move || {
                                let palette = theme.palette();
                                format!(
                                    "absolute -bottom-4 sm:-bottom-6 left-2 right-2 sm:left-4 sm:right-4 {} rounded-2xl p-4 sm:p-6 shadow-xl border {}",
                                    palette.bg_card,
                                    palette.border_light
                                )
                            }>
                                <div class="grid grid-cols-3 gap-2 sm:gap-4 text-center">
                                    {HERO_STATS
                                        .iter()
                                        .enumerate()
                                        .map(|(i, stat)| {
                                            let middle = i == 1;
                                            view! {
                                                <div class=move || {
                                                    if middle {
                                                        format!("border-x {}", theme.palette().border)
                                                    } else {
                                                        String::new()
                                                    }
                                                }>
                                                    <p class="text-xl sm:text-2xl font-bold text-red-500">
                                                        <AnimatedCounter end=stat.value suffix=stat.suffix />
                                                    </p>
                                                    <p class=move || format!("text-[10px] sm:text-xs {}", theme.palette().text_light)>
                                                        {stat.label}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 scroll-indicator hidden sm:block">
                <div class=move || {
                    let border = if is_dark.get() { "border-red-800" } else { "border-red-300" };
                    format!("w-6 h-10 rounded-full border-2 {border} flex justify-center pt-2")
                }>
                    <div class="w-1.5 h-3 bg-red-500 rounded-full animate-bounce"></div>
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
    fn test_hero_artwork_is_described() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_theme_context();
            view! { <Hero /> }.to_html()
        });

        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"role="img""#));
        assert!(html.contains(
            "SparkElec Pte Ltd - Professional electrician at work in Singapore"
        ));
    }
}

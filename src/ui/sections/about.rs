use leptos::html::Div;
use leptos::prelude::*;

use super::{SectionHeader, reveal_class};
use crate::core::content::STATS;
use crate::core::visibility::VisibilityOptions;
use crate::ui::animated_counter::AnimatedCounter;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::theme::use_theme_context;

const VALUES: [(&str, &str, &str); 3] = [
    (
        icons::SHIELD,
        "Safety First Approach",
        "Every project adheres to SS 638 standards and EMA regulations. We never compromise on safety.",
    ),
    (
        icons::AWARD,
        "Licensed Professionals",
        "Our team consists of EMA-licensed electricians with extensive training and certifications.",
    ),
    (
        icons::CLOCK,
        "24/7 Emergency Support",
        "Electrical emergencies don't wait. Neither do we. Available round the clock for urgent repairs.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme_context();
    let (node_ref, revealed) = use_in_view::<Div>(VisibilityOptions::default());

    view! {
        <section id="about" class=move || format!("py-16 sm:py-24 {}", theme.palette().bg_alt)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div node_ref=node_ref>
                    <SectionHeader
                        badge="About Us"
                        lead="Singapore's"
                        highlight="Trusted"
                        tail="Electricians"
                        description="For over 15 years, we've been delivering excellence in electrical services across Singapore. From HDB flats to commercial buildings, we handle it all."
                        revealed=revealed
                    />

                    <div class="grid md:grid-cols-2 gap-8 lg:gap-12 items-center">
                        <div class=move || {
                            reveal_class(revealed.get(), "animate-fade-right animate-delay-200", "space-y-4 sm:space-y-6")
                        }>
                            {VALUES
                                .into_iter()
                                .map(|(icon, title, body)| {
                                    view! {
                                        <div class=move || {
                                            let palette = theme.palette();
                                            format!(
                                                "p-4 sm:p-6 {} rounded-2xl border {} card-hover transition-all duration-300",
                                                palette.bg,
                                                palette.border_light
                                            )
                                        }>
                                            <h3 class="text-lg sm:text-xl font-semibold mb-2 sm:mb-3 flex items-center gap-2">
                                                <div class=move || {
                                                    let tint = if theme.is_dark.get() { "bg-red-900/50" } else { "bg-red-100" };
                                                    format!("w-10 h-10 {tint} rounded-xl flex items-center justify-center")
                                                }>
                                                    <Icon name=icon class="w-5 h-5 text-red-500" />
                                                </div>
                                                {title}
                                            </h3>
                                            <p class=move || format!("{} text-sm sm:text-base", theme.palette().text_muted)>
                                                {body}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class=move || {
                            reveal_class(revealed.get(), "animate-fade-left animate-delay-300", "grid grid-cols-2 gap-3 sm:gap-4")
                        }>
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class=move || {
                                            let palette = theme.palette();
                                            format!(
                                                "p-4 sm:p-6 {} rounded-2xl border {} text-center card-hover transition-all duration-300 shadow-sm",
                                                palette.bg_card,
                                                palette.border_light
                                            )
                                        }>
                                            <p class=move || format!("text-3xl sm:text-4xl font-bold {} mb-2", theme.palette().gradient_text)>
                                                <AnimatedCounter end=stat.value suffix=stat.suffix />
                                            </p>
                                            <p class=move || format!("text-xs sm:text-sm {}", theme.palette().text_muted)>
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
        </section>
    }
}

use leptos::html::Div;
use leptos::prelude::*;

use super::{SectionHeader, reveal_class};
use crate::core::content::{CUSTOMER_TYPES, SECTORS, TRUST_BADGES};
use crate::core::visibility::VisibilityOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::theme::use_theme_context;

/// Market segments and repeat customers. Not part of the tracked sections.
#[component]
pub fn Sectors() -> impl IntoView {
    let theme = use_theme_context();
    let (node_ref, revealed) = use_in_view::<Div>(VisibilityOptions::default());

    view! {
        <section id="sectors" class=move || format!("py-16 sm:py-24 {}", theme.palette().bg_alt)>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div node_ref=node_ref>
                    <SectionHeader
                        badge="Sectors We Serve"
                        lead="Trusted Across"
                        highlight="All Sectors"
                        description="From residential homes to commercial spaces, we deliver reliable electrical solutions for every need."
                        revealed=revealed
                    />

                    <div class="grid sm:grid-cols-3 gap-4 sm:gap-6 mb-12 sm:mb-16">
                        {SECTORS
                            .iter()
                            .enumerate()
                            .map(|(i, sector)| {
                                let animation = if i % 2 == 0 { "animate-fade-left" } else { "animate-fade-right" };
                                view! {
                                    <div
                                        class=move || {
                                            let palette = theme.palette();
                                            reveal_class(
                                                revealed.get(),
                                                animation,
                                                &format!(
                                                    "group p-6 sm:p-8 {} rounded-2xl border {} hover:border-red-500/30 transition-all duration-300 card-hover text-center",
                                                    palette.bg_card,
                                                    palette.border_light
                                                ),
                                            )
                                        }
                                        style=format!("animation-delay: {:.1}s", (i + 2) as f64 * 0.1)
                                    >
                                        <div class="w-14 h-14 sm:w-16 sm:h-16 btn-gradient rounded-2xl flex items-center justify-center mx-auto mb-4 group-hover:scale-110 transition-transform shadow-lg">
                                            <Icon name=sector.icon class="w-7 h-7 sm:w-8 sm:h-8 text-white" />
                                        </div>
                                        <h3 class="text-lg sm:text-xl font-semibold mb-2">{sector.title}</h3>
                                        <p class=move || format!("{} text-sm", theme.palette().text_muted)>{sector.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        let palette = theme.palette();
                        reveal_class(
                            revealed.get(),
                            "animate-scale-up animate-delay-200",
                            &format!("{} rounded-3xl border {} p-6 sm:p-10", palette.bg_card, palette.border_light),
                        )
                    }>
                        <div class="text-center mb-8">
                            <h3 class="text-xl sm:text-2xl font-bold mb-2">"Our Repeat Customers"</h3>
                            <p class=move || format!("{} text-sm", theme.palette().text_muted)>
                                "Trusted by businesses across Singapore"
                            </p>
                        </div>
                        <div class="grid grid-cols-2 sm:grid-cols-4 gap-3 sm:gap-4">
                            {CUSTOMER_TYPES
                                .iter()
                                .map(|customer| {
                                    view! {
                                        <div class=move || {
                                            let tint = if theme.is_dark.get() {
                                                "bg-gray-800/50 hover:bg-gray-700/50"
                                            } else {
                                                "bg-gray-50 hover:bg-gray-100"
                                            };
                                            format!("flex items-center gap-3 p-3 sm:p-4 rounded-xl {tint} transition-colors")
                                        }>
                                            <Icon name=customer.icon class="w-5 h-5 text-red-500 flex-shrink-0" />
                                            <span class="text-xs sm:text-sm font-medium">{customer.name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap justify-center gap-4 sm:gap-6 mt-8 pt-6 border-t border-dashed border-gray-300 dark:border-gray-700">
                            {TRUST_BADGES
                                .iter()
                                .map(|badge| {
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 sm:w-5 sm:h-5 text-green-500" />
                                            <span class=move || format!("text-xs sm:text-sm font-medium {}", theme.palette().text_muted)>
                                                {*badge}
                                            </span>
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

//! Fixed navigation bar with section links, theme toggle and call button

use leptos::prelude::*;

use crate::core::content::{BUSINESS, NAV_ITEMS};
use crate::core::sections::SectionId;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll_tracker::{ScrollTracker, scroll_to_section};
use crate::ui::theme::use_theme_context;

/// Accessible label for the theme toggle; names the theme it switches to
fn theme_toggle_label(is_dark: bool) -> &'static str {
    if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

#[component]
pub fn Navbar(tracker: ScrollTracker) -> impl IntoView {
    let theme = use_theme_context();
    let (menu_open, set_menu_open) = signal(false);

    let navigate = move |id: SectionId| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    let nav_class = move || {
        if tracker.is_scrolled() {
            let shadow = if theme.is_dark.get() {
                "shadow-red-950/20"
            } else {
                "shadow-red-100/50"
            };
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {} shadow-lg {}",
                theme.palette().bg_alt,
                shadow
            )
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent".to_string()
        }
    };

    view! {
        <nav role="navigation" aria-label="Main navigation" class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 py-4">
                <div class="flex items-center justify-between">
                    <button
                        class="flex items-center gap-2 sm:gap-3 cursor-pointer text-left"
                        on:click=move |_| navigate("home")
                    >
                        <div class="w-10 h-10 sm:w-12 sm:h-12 btn-gradient rounded-xl flex items-center justify-center shadow-lg glow-red">
                            <Icon name=icons::ZAP class="w-5 h-5 sm:w-7 sm:h-7 text-white" />
                        </div>
                        <div>
                            <span class="text-lg sm:text-xl font-bold text-red-600">"SPARK"</span>
                            <span class=move || format!("text-lg sm:text-xl font-bold {}", theme.palette().text)>
                                "ELEC"
                            </span>
                            <p class=move || format!("text-[10px] sm:text-xs {} -mt-1", theme.palette().text_light)>
                                {BUSINESS.tagline}
                            </p>
                        </div>
                    </button>

                    // Desktop links
                    <div class="hidden lg:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.section;
                                view! {
                                    <button
                                        class=move || {
                                            if tracker.is_active(id) {
                                                "relative py-2 text-sm font-medium transition-colors text-red-500".to_string()
                                            } else {
                                                format!(
                                                    "relative py-2 text-sm font-medium transition-colors {} hover:text-red-500",
                                                    theme.palette().text_muted
                                                )
                                            }
                                        }
                                        aria-current=move || tracker.is_active(id).then_some("true")
                                        on:click=move |_| navigate(id)
                                    >
                                        {item.label}
                                        <Show when=move || tracker.is_active(id)>
                                            <span class="absolute bottom-0 left-0 right-0 h-0.5 bg-gradient-to-r from-red-600 to-red-400 rounded-full"></span>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-2 sm:gap-4">
                        <button
                            class=move || {
                                let palette = theme.palette();
                                format!(
                                    "p-2.5 rounded-xl {} border {} hover:border-red-500/50 transition-all",
                                    palette.bg_card,
                                    palette.border
                                )
                            }
                            aria-label=move || theme_toggle_label(theme.is_dark.get())
                            on:click=move |_| theme.toggle()
                        >
                            <Show
                                when=move || theme.is_dark.get()
                                fallback=|| view! { <Icon name=icons::MOON class="w-5 h-5 text-gray-600" /> }
                            >
                                <Icon name=icons::SUN class="w-5 h-5 text-amber-400" />
                            </Show>
                        </button>

                        <a
                            href=BUSINESS.tel_uri()
                            class="hidden sm:flex items-center gap-2 px-4 sm:px-6 py-2.5 sm:py-3 btn-gradient text-white font-semibold rounded-xl shadow-lg text-sm sm:text-base glow-red"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4" />
                            <span class="hidden md:inline">{BUSINESS.phone}</span>
                            <span class="md:hidden">"Call"</span>
                        </a>

                        <button
                            class=move || format!("lg:hidden p-2 {}", theme.palette().text)
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <Show
                                when=move || menu_open.get()
                                fallback=|| view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            >
                                <Icon name=icons::X class="w-6 h-6" />
                            </Show>
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=move || menu_open.get()>
                    <div class=move || {
                        let palette = theme.palette();
                        format!(
                            "lg:hidden mt-4 pb-4 {} rounded-xl shadow-lg mx-2 px-4 animate-fade-up border {}",
                            palette.bg_card,
                            palette.border
                        )
                    }>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.section;
                                view! {
                                    <button
                                        class=move || {
                                            let palette = theme.palette();
                                            let color = if tracker.is_active(id) {
                                                "text-red-500"
                                            } else {
                                                palette.text_muted
                                            };
                                            format!(
                                                "block w-full text-left py-3 text-lg font-medium border-b {} last:border-0 {}",
                                                palette.border_light,
                                                color
                                            )
                                        }
                                        on:click=move |_| navigate(id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <a
                            href=BUSINESS.tel_uri()
                            class="flex items-center justify-center gap-2 mt-4 px-6 py-3 btn-gradient text-white font-semibold rounded-xl"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4" />
                            <span>{BUSINESS.phone}</span>
                        </a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::SECTIONS;
    use crate::core::sections::SectionList;
    use crate::ui::scroll_tracker::use_scroll_tracker;
    use crate::ui::theme::provide_theme_context;

    #[test]
    fn test_toggle_label_names_target_theme() {
        assert_eq!(theme_toggle_label(false), "Switch to dark mode");
        assert_eq!(theme_toggle_label(true), "Switch to light mode");
    }

    #[test]
    fn test_server_render() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_theme_context();
            let tracker = use_scroll_tracker(SectionList::new(&SECTIONS).unwrap());
            view! { <Navbar tracker=tracker /> }.to_html()
        });

        assert!(html.contains("Switch to dark mode"));
        assert!(html.contains("tel:+6591234567"));
        assert!(html.contains("bg-transparent"));
        for item in NAV_ITEMS {
            assert!(html.contains(item.label));
        }
    }
}

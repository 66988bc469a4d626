use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::{BUSINESS, FOOTER_SERVICES};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Year shown in the copyright line
fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

/// Copyright year read from the server clock. The client reuses the value
/// serialized into the page instead of its own clock, so hydration sees the
/// same text across a year boundary or a timezone difference.
fn shared_copyright_year() -> i32 {
    SharedValue::new(copyright_year).into_inner()
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme_context();
    let year = shared_copyright_year();

    view! {
        <footer class=move || {
            if theme.is_dark.get() { "py-12 bg-gray-950 text-white" } else { "py-12 bg-gray-900 text-white" }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6">
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-3 mb-4">
                            <div class="w-10 h-10 btn-gradient rounded-xl flex items-center justify-center">
                                <Icon name=icons::ZAP class="w-6 h-6 text-white" />
                            </div>
                            <div>
                                <span class="text-lg font-bold text-red-400">"SPARK"</span>
                                <span class="text-lg font-bold">"ELEC"</span>
                            </div>
                        </div>
                        <p class="text-gray-400 text-sm">
                            "Your trusted electrical partner in Singapore since " {BUSINESS.founded_year}
                            ". Licensed, insured, and committed to quality."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4 text-white">"Services"</h4>
                        <ul class="space-y-2 text-sm text-gray-400">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|service| view! { <li class="hover:text-red-400 transition-colors">{*service}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4 text-white">"Contact"</h4>
                        <a
                            href=BUSINESS.tel_uri()
                            class="flex items-center gap-3 p-4 bg-red-600/20 rounded-xl border border-red-600/30"
                        >
                            <div class="w-12 h-12 btn-gradient rounded-xl flex items-center justify-center flex-shrink-0">
                                <Icon name=icons::PHONE class="w-6 h-6 text-white" />
                            </div>
                            <div>
                                <p class="text-white font-semibold">{BUSINESS.phone}</p>
                                <p class="text-xs text-red-300 mt-0.5">"24/7 Emergency Line"</p>
                            </div>
                        </a>
                    </div>
                </div>

                <div class=move || {
                    let border = if theme.is_dark.get() { "border-gray-800" } else { "border-gray-700" };
                    format!("flex flex-col sm:flex-row justify-between items-center pt-8 border-t {border} gap-4")
                }>
                    <p class="text-sm text-gray-400 text-center sm:text-left">
                        "© " {year} " " {BUSINESS.name} ". All rights reserved. UEN: " {BUSINESS.uen}
                    </p>
                    <p class="text-sm text-gray-500 text-center sm:text-right">
                        "Powered by "
                        <a
                            href="https://github.com/jaganedits"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-red-400 hover:text-red-300 transition-colors"
                        >
                            "Jaganedits"
                        </a>
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::provide_theme_context;

    #[test]
    fn test_footer_lists_business_details() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_theme_context();
            view! { <Footer /> }.to_html()
        });

        assert!(html.contains("UEN: "));
        assert!(html.contains("200912345A"));
        assert!(html.contains(&copyright_year().to_string()));
        assert!(html.contains("24/7 Emergency Line"));
        for service in FOOTER_SERVICES {
            assert!(html.contains(service));
        }
    }

    #[test]
    fn test_copyright_year_is_current() {
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_server_renders_shared_year() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(shared_copyright_year(), copyright_year());
        });
    }
}

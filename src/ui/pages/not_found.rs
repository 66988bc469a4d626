//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::BUSINESS;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let theme = use_theme_context();

    // Set the HTTP status when rendering on the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {}", BUSINESS.name) />

        <div class=move || {
            let palette = theme.palette();
            format!("min-h-screen {} flex flex-col items-center justify-center p-4", palette.bg)
        }>
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 btn-gradient rounded-full flex items-center justify-center glow-red">
                    <Icon name=icons::ZAP class="w-12 h-12 text-white" />
                </div>

                <h1 class=move || format!("text-6xl font-bold {} mb-4", theme.palette().text)>"404"</h1>

                <h2 class=move || format!("text-2xl font-semibold {} mb-2", theme.palette().text)>
                    "Page Not Found"
                </h2>

                <p class=move || format!("{} mb-8 max-w-md mx-auto", theme.palette().text_muted)>
                    "The page you're looking for doesn't exist. Need an electrician? We're one call away."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 btn-gradient text-white font-medium rounded-xl transition-colors"
                    >
                        "Go Home"
                    </A>
                    <a
                        href=BUSINESS.tel_uri()
                        class="px-6 py-3 border-2 border-red-600 text-red-500 hover:bg-red-600 hover:text-white font-medium rounded-xl transition-colors"
                    >
                        {format!("Call {}", BUSINESS.phone)}
                    </a>
                </div>
            </div>
        </div>
    }
}

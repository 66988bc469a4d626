use leptos::prelude::*;

use crate::core::content::BUSINESS;
use crate::ui::icon::{Icon, icons};

/// WhatsApp bubble on every screen plus a call button on small screens
#[component]
pub fn FloatingButtons() -> impl IntoView {
    view! {
        <a
            href=BUSINESS.whatsapp_uri()
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            class="fixed bottom-4 sm:bottom-6 right-4 sm:right-6 w-12 h-12 sm:w-14 sm:h-14 bg-green-500 rounded-full flex items-center justify-center shadow-lg hover:scale-110 transition-transform z-50"
        >
            <Icon name=icons::WHATSAPP class="w-6 h-6 sm:w-7 sm:h-7 text-white" />
        </a>

        <a
            href=BUSINESS.tel_uri()
            aria-label="Call us"
            class="sm:hidden fixed bottom-4 left-4 w-12 h-12 btn-gradient rounded-full flex items-center justify-center shadow-lg z-50 glow-red"
        >
            <Icon name=icons::PHONE class="w-6 h-6 text-white" />
        </a>
    }
}

//! SparkElec - marketing site for a Singapore electrical contractor
//!
//! A single scrolling page with scroll-driven navigation highlighting,
//! reveal-on-scroll sections, animated counters and a persisted light/dark
//! theme, server-rendered with Leptos and hydrated in WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

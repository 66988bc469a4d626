//! Leptos components and browser bindings

pub mod animated_counter;
pub mod floating_buttons;
pub mod footer;
#[cfg(not(feature = "ssr"))]
pub mod frame_loop;
pub mod icon;
pub mod in_view;
pub mod navbar;
pub mod pages;
pub mod scroll_tracker;
pub mod sections;
pub mod theme;

pub use icon::{Icon, icons};
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};

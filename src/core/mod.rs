//! Browser-independent site logic: section tracking, reveal triggers,
//! counter animation, theme preference and static content

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod sections;
#[cfg(feature = "ssr")]
pub mod server;
pub mod theme;
pub mod visibility;

pub use error::{SiteError, SiteResult};

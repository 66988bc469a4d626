//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The listen address and asset paths come from `[package.metadata.leptos]`
//! and are not duplicated here.

use super::content::BUSINESS;
use super::error::{SiteError, SiteResult};

/// Environment variable overriding the canonical page URL
pub const CANONICAL_URL_VAR: &str = "SITE_CANONICAL_URL";

/// Environment variable toggling response compression
pub const COMPRESSION_VAR: &str = "SITE_COMPRESSION";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canonical URL advertised in the page head
    /// Example: https://sgelectrician.sg/
    pub canonical_url: Option<String>,

    /// Whether responses are brotli/gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SiteResult<Self> {
        let canonical_url = lookup(CANONICAL_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if let Some(url) = &canonical_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(SiteError::Config {
                    key: CANONICAL_URL_VAR.to_string(),
                    message: format!("expected an http(s) URL, got {url:?}"),
                });
            }
        }

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) => parse_flag(COMPRESSION_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            canonical_url,
            compression,
        })
    }

    /// Check if the canonical URL is overridden
    pub fn has_canonical_override(&self) -> bool {
        self.canonical_url.is_some()
    }

    /// Canonical URL, falling back to the business default
    pub fn canonical_url(&self) -> &str {
        self.canonical_url.as_deref().unwrap_or(BUSINESS.canonical)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canonical_url: None,
            compression: true,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> SiteResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SiteError::Config {
            key: key.to_string(),
            message: format!("expected true or false, got {other:?}"),
        }),
    }
}

//! Light/dark theme preference
//!
//! The preference is resolved once at startup (stored choice, then the OS
//! `prefers-color-scheme` signal, then light) and persisted on every change
//! under the `"theme"` key.

use std::cell::RefCell;
use std::collections::HashMap;

use derive_more::Display;

use super::error::SiteResult;

/// Storage key holding `"dark"` or `"light"`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Effective color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ThemeMode {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ThemeMode {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Key-value storage for the persisted theme
pub trait ThemeStore {
    fn load(&self) -> SiteResult<Option<String>>;
    fn save(&self, value: &str) -> SiteResult<()>;
}

/// In-memory store, used on the server and in tests
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(THEME_STORAGE_KEY.to_string(), value.to_string());
        store
    }

    pub fn get(&self) -> Option<String> {
        self.entries.borrow().get(THEME_STORAGE_KEY).cloned()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> SiteResult<Option<String>> {
        Ok(self.get())
    }

    fn save(&self, value: &str) -> SiteResult<()> {
        self.entries
            .borrow_mut()
            .insert(THEME_STORAGE_KEY.to_string(), value.to_string());
        Ok(())
    }
}

/// The process-wide theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Resolve the initial theme and write it back to the store.
    ///
    /// Any non-empty stored value is a user choice: `"dark"` is dark and
    /// everything else is light. A missing or empty value, or a storage
    /// error (logged), falls through to the OS preference.
    pub fn resolve(store: &impl ThemeStore, system_prefers_dark: bool) -> Self {
        let stored = match store.load() {
            Ok(value) => value
                .filter(|value| !value.is_empty())
                .map(|value| ThemeMode::from_is_dark(value == "dark")),
            Err(err) => {
                tracing::warn!(%err, "could not read theme preference");
                None
            }
        };

        let mode = stored.unwrap_or(ThemeMode::from_is_dark(system_prefers_dark));
        let preference = Self { mode };
        preference.persist(store);
        preference
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the theme and persist it immediately
    pub fn toggle(&mut self, store: &impl ThemeStore) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.persist(store);
        self.mode
    }

    fn persist(&self, store: &impl ThemeStore) {
        if let Err(err) = store.save(&self.mode.to_string()) {
            tracing::warn!(%err, mode = %self.mode, "could not persist theme preference");
        }
    }
}

/// Tailwind class palette for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg: &'static str,
    pub bg_alt: &'static str,
    pub bg_card: &'static str,
    pub bg_card_hover: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub text_light: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub badge: &'static str,
    pub gradient_text: &'static str,
}

const LIGHT_PALETTE: ThemePalette = ThemePalette {
    bg: "bg-gray-50",
    bg_alt: "bg-white",
    bg_card: "bg-white",
    bg_card_hover: "hover:bg-gray-50",
    text: "text-gray-900",
    text_muted: "text-gray-600",
    text_light: "text-gray-500",
    border: "border-gray-200",
    border_light: "border-gray-100",
    badge: "bg-red-100 text-red-700",
    gradient_text: "gradient-text",
};

const DARK_PALETTE: ThemePalette = ThemePalette {
    bg: "bg-gray-950",
    bg_alt: "bg-gray-900",
    bg_card: "bg-gray-900/80",
    bg_card_hover: "hover:bg-gray-800",
    text: "text-gray-100",
    text_muted: "text-gray-400",
    text_light: "text-gray-500",
    border: "border-gray-800",
    border_light: "border-gray-800/50",
    badge: "bg-red-900/50 text-red-300",
    gradient_text: "gradient-text-dark",
};

impl ThemePalette {
    pub fn for_mode(is_dark: bool) -> &'static ThemePalette {
        if is_dark { &DARK_PALETTE } else { &LIGHT_PALETTE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SiteError;

    /// Store whose writes always fail
    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> SiteResult<Option<String>> {
            Err(SiteError::StorageUnavailable)
        }

        fn save(&self, _value: &str) -> SiteResult<()> {
            Err(SiteError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(ThemeMode::from_is_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_os_dark_then_toggle_persists_light() {
        let store = MemoryThemeStore::default();
        let mut preference = ThemePreference::resolve(&store, true);
        assert!(preference.is_dark());

        assert_eq!(preference.toggle(&store), ThemeMode::Light);
        assert!(!preference.is_dark());
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_stored_value_beats_os_preference() {
        let store = MemoryThemeStore::with_value("light");
        assert!(!ThemePreference::resolve(&store, true).is_dark());

        let store = MemoryThemeStore::with_value("dark");
        assert!(ThemePreference::resolve(&store, false).is_dark());
    }

    #[test]
    fn test_defaults_to_light() {
        let store = MemoryThemeStore::default();
        let preference = ThemePreference::resolve(&store, false);
        assert_eq!(preference.mode(), ThemeMode::Light);
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_unknown_stored_value_means_light() {
        let store = MemoryThemeStore::with_value("sepia");
        let preference = ThemePreference::resolve(&store, true);
        assert!(!preference.is_dark());
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_empty_stored_value_falls_back_to_os() {
        let store = MemoryThemeStore::with_value("");
        let preference = ThemePreference::resolve(&store, true);
        assert!(preference.is_dark());
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn test_every_toggle_is_persisted() {
        let store = MemoryThemeStore::default();
        let mut preference = ThemePreference::resolve(&store, false);

        preference.toggle(&store);
        assert_eq!(store.get().as_deref(), Some("dark"));
        preference.toggle(&store);
        assert_eq!(store.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_storage_errors_are_absorbed() {
        let mut preference = ThemePreference::resolve(&BrokenStore, true);
        assert!(preference.is_dark());

        preference.toggle(&BrokenStore);
        assert!(!preference.is_dark());
    }

    #[test]
    fn test_palette_selection() {
        let light = ThemePalette::for_mode(false);
        let dark = ThemePalette::for_mode(true);
        assert_eq!(light.bg, "bg-gray-50");
        assert_eq!(dark.bg, "bg-gray-950");
        assert_eq!(dark.gradient_text, "gradient-text-dark");
        assert_ne!(light, dark);
    }
}

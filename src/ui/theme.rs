//! Theme context for the light/dark color scheme
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence under the `"theme"` key
//! - System theme detection via prefers-color-scheme
//!
//! The server and the first client render both start light so hydration
//! matches; the stored or system preference is applied right after mount.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::error::{SiteError, SiteResult};
use crate::core::theme::{ThemeMode, ThemePalette, ThemePreference, ThemeStore};

#[cfg(not(feature = "ssr"))]
use crate::core::theme::THEME_STORAGE_KEY;

/// Theme context shared by every component below the provider
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether the dark theme is active
    pub is_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Flip between light and dark and persist the choice
    pub fn toggle(&self) {
        let mut preference =
            ThemePreference::with_mode(ThemeMode::from_is_dark(self.is_dark.get_untracked()));
        preference.toggle(&LocalStorageThemeStore);
        self.is_dark.set(preference.is_dark());
        apply_theme_class(preference.is_dark());
    }

    /// Class palette for the current theme (reactive)
    pub fn palette(&self) -> &'static ThemePalette {
        ThemePalette::for_mode(self.is_dark.get())
    }
}

/// Theme storage backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

#[cfg(not(feature = "ssr"))]
impl LocalStorageThemeStore {
    fn storage() -> SiteResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(SiteError::StorageUnavailable)?;
        window
            .local_storage()
            .map_err(|err| SiteError::Storage(format!("{err:?}")))?
            .ok_or(SiteError::StorageUnavailable)
    }
}

#[cfg(not(feature = "ssr"))]
impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> SiteResult<Option<String>> {
        Self::storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|err| SiteError::Storage(format!("{err:?}")))
    }

    fn save(&self, value: &str) -> SiteResult<()> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|err| SiteError::Storage(format!("{err:?}")))
    }
}

#[cfg(feature = "ssr")]
impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> SiteResult<Option<String>> {
        Err(SiteError::StorageUnavailable)
    }

    fn save(&self, _value: &str) -> SiteResult<()> {
        Err(SiteError::StorageUnavailable)
    }
}

/// Toggle the `dark` class on the document element
fn apply_theme_class(is_dark: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(html) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let class_list = html.class_list();
            let result = if is_dark {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
            if let Err(err) = result {
                tracing::warn!(?err, "could not update the dark class");
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = is_dark;
    }
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        is_dark: RwSignal::new(false),
    };

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        let preference =
            ThemePreference::resolve(&LocalStorageThemeStore, detect_system_prefers_dark());
        ctx.is_dark.set(preference.is_dark());
        apply_theme_class(preference.is_dark());
    });

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree.
///
/// Panics when called outside [`provide_theme_context`].
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by provide_theme_context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "ThemeContext must be provided by provide_theme_context")]
    fn test_use_without_provider_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_theme_context();
        });
    }

    #[test]
    fn test_provider_starts_light() {
        let owner = Owner::new();
        owner.with(|| {
            provide_theme_context();
            let ctx = use_theme_context();
            assert!(!ctx.is_dark.get_untracked());
        });
    }

    #[test]
    fn test_toggle_flips_without_storage() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme_context();
            ctx.toggle();
            assert!(ctx.is_dark.get_untracked());
            ctx.toggle();
            assert!(!ctx.is_dark.get_untracked());
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_store_is_unavailable() {
        assert_eq!(
            LocalStorageThemeStore.load(),
            Err(SiteError::StorageUnavailable)
        );
    }
}

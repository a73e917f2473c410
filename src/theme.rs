//! Theme Persistence
//!
//! Light/dark theme stored in browser local storage and applied to the
//! document root as `data-theme`.

use leptos::logging::warn;

use crate::models::Theme;

/// Local storage key
pub const THEME_KEY: &str = "theme";

pub trait ThemeStore {
    /// Persisted theme, or the default when none is stored
    fn get(&self) -> Theme;
    fn set(&self, theme: Theme);
}

/// `window.localStorage` backed store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn get(&self) -> Theme {
        Self::storage()
            .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    fn set(&self, theme: Theme) {
        let Some(storage) = Self::storage() else {
            warn!("[THEME] localStorage unavailable, theme not persisted");
            return;
        };
        if let Err(e) = storage.set_item(THEME_KEY, theme.as_str()) {
            warn!("[THEME] Failed to persist theme: {:?}", e);
        }
    }
}

/// Set `data-theme` on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Apply the persisted theme at start-up and write it back
pub fn restore_theme(store: &impl ThemeStore, apply: impl FnOnce(Theme)) -> Theme {
    let theme = store.get();
    apply(theme);
    store.set(theme);
    theme
}

/// Flip the in-memory theme, persist it and return the new value.
///
/// The store is written but never read back, so the toggle keeps working
/// when local storage is unavailable.
pub fn toggle_theme(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(next);
    next
}

#[cfg(test)]
pub use memory::MemoryThemeStore;

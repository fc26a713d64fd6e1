//! Browser glue: `localStorage`, the root theme attribute and page navigation.

use velib_map::theme::{load_theme, save_theme, Theme, ThemeStore, THEME_ATTRIBUTE};

/// `window.localStorage`, when the browser grants it.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to store {}: {:?}", key, e);
            }
        }
    }
}

/// Theme saved by a previous visit, light if none.
pub fn stored_theme() -> Theme {
    load_theme(&LocalStorage::open())
}

pub fn persist_theme(theme: Theme) {
    save_theme(&mut LocalStorage::open(), theme);
}

/// Set `data-theme` on `<html>` for the stylesheets.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("Failed to apply theme: {:?}", e);
        }
    }
}

/// Full page load of `path`.
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("Navigation to {} failed: {:?}", path, e);
        }
    }
}

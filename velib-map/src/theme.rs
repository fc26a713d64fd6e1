//! Light/dark theme preference.
//!
//! The preference lives under a single key in a string key-value store
//! (`localStorage` in the browser). The map tiles ignore it and always
//! render light.

use std::fmt;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Attribute set on the document root for stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    /// Icon offering the other theme: a sun while dark, a moon while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value store.
pub trait ThemeStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

pub fn load_theme(store: &impl ThemeStore) -> Theme {
    Theme::from_stored(store.get_item(THEME_KEY).as_deref())
}

pub fn save_theme(store: &mut impl ThemeStore, theme: Theme) {
    store.set_item(THEME_KEY, theme.as_str());
}

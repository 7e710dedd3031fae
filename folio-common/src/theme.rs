//! Light/dark theme preference

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

/// Local storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root for dark mode
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Key-value store backing the single persisted preference
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Parse a stored value, treating unknown values as absent.
fn parse_stored(stored: Option<String>) -> Option<Theme> {
    let raw = stored?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!("Ignoring stored theme: {e}");
            None
        }
    }
}

/// Reads and writes the theme through a [`PreferenceStore`]
pub struct ThemePreference<P: PreferenceStore> {
    store: P,
}

impl<P: PreferenceStore> ThemePreference<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// Stored preference, else the system color-scheme preference.
    pub fn initial(&self, prefers_dark: bool) -> Theme {
        parse_stored(self.store.get(THEME_STORAGE_KEY)).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Persist `theme`.
    pub fn apply(&mut self, theme: Theme) {
        debug!("Applying theme {theme}");
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
    }

    /// Flip the stored theme (absent counts as light) and persist it.
    pub fn toggle(&mut self) -> Theme {
        let current = parse_stored(self.store.get(THEME_STORAGE_KEY)).unwrap_or_default();
        let next = current.toggled();
        self.apply(next);
        next
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn stored(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, value);
        store
    }

    #[test]
    fn test_initial_prefers_stored_value() {
        let prefs = ThemePreference::new(stored("light"));
        assert_eq!(prefs.initial(true), Theme::Light);
    }

    #[test]
    fn test_initial_falls_back_to_system() {
        let prefs = ThemePreference::new(MemoryStore::default());
        assert_eq!(prefs.initial(true), Theme::Dark);
        assert_eq!(prefs.initial(false), Theme::Light);
    }

    #[test]
    fn test_initial_ignores_garbage() {
        let prefs = ThemePreference::new(stored("sepia"));
        assert_eq!(prefs.initial(true), Theme::Dark);
    }

    #[test]
    fn test_toggle_defaults_to_light() {
        let mut prefs = ThemePreference::new(MemoryStore::default());
        assert_eq!(prefs.toggle(), Theme::Dark);
        assert_eq!(prefs.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(prefs.toggle(), Theme::Light);
        assert_eq!(prefs.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ThemeParseError("Dark".to_string()))
        );
    }
}

pub mod store;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::document::Document;
use store::ThemeStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeSetting {
    Light,
    #[default]
    Dark,
}

impl ThemeSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeSetting::Light => "light",
            ThemeSetting::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeSetting::Light => ThemeSetting::Dark,
            ThemeSetting::Dark => ThemeSetting::Light,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSetting {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemeSetting::Light),
            "dark" => Ok(ThemeSetting::Dark),
            other => Err(ThemeParseError::Unknown { value: other.to_string() }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeParseError {
    #[error("Unknown theme `{value}`")]
    Unknown { value: String },
}

/// Persisted light/dark choice.
///
/// Reading never fails: a missing, unreadable or unrecognised value resolves to
/// [`ThemeSetting::Dark`]. Writing is best effort; the caller's theme still
/// changes when the store rejects the write.
pub struct ThemePreference<T> {
    store: T,
}

impl<T: ThemeStore> ThemePreference<T> {
    pub fn new(store: T) -> Self {
        Self { store }
    }

    pub fn get(&self) -> ThemeSetting {
        match self.store.load() {
            Ok(Some(raw)) => raw.parse::<ThemeSetting>().unwrap_or_else(|error| {
                warn!(%error, "ignoring stored theme");
                ThemeSetting::default()
            }),
            Ok(None) => ThemeSetting::default(),
            Err(error) => {
                warn!(%error, "theme store unreadable");
                ThemeSetting::default()
            }
        }
    }

    pub fn set<D: Document>(&mut self, value: ThemeSetting, document: &mut D) {
        if let Err(error) = self.store.save(value.as_str()) {
            warn!(%error, theme = %value, "theme not persisted");
        }
        document.set_root_class(value.as_str());
    }

    pub fn store(&self) -> &T {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HeadlessDocument;
    use store::MemoryThemeStore;

    #[test]
    fn missing_value_defaults_to_dark() {
        let preference = ThemePreference::new(MemoryThemeStore::default());
        assert_eq!(preference.get(), ThemeSetting::Dark);
    }

    #[test]
    fn unknown_value_defaults_to_dark() {
        let preference = ThemePreference::new(MemoryThemeStore::with_value("sepia"));
        assert_eq!(preference.get(), ThemeSetting::Dark);
    }

    #[test]
    fn stored_value_is_trimmed() {
        let preference = ThemePreference::new(MemoryThemeStore::with_value("light\n"));
        assert_eq!(preference.get(), ThemeSetting::Light);
    }

    #[test]
    fn set_persists_and_applies() {
        let mut preference = ThemePreference::new(MemoryThemeStore::default());
        let mut document = HeadlessDocument::default();

        preference.set(ThemeSetting::Light, &mut document);

        assert_eq!(preference.store().value(), Some("light"));
        assert_eq!(document.root_class(), Some("light"));
        assert_eq!(preference.get(), ThemeSetting::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [ThemeSetting::Light, ThemeSetting::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}

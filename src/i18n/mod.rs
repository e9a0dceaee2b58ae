// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! The supported locales form a closed set: every locale variant has a
//! complete [`Dictionary`] compiled into the binary, so translation lookups
//! cannot miss at runtime. [`LocaleState`] holds the active locale for the
//! session, restores a previously persisted choice on startup, and writes
//! the choice back to the settings file when the user switches language.

pub mod dictionary;
mod en;
mod es;

pub use dictionary::Dictionary;

use crate::config::{self, Config};
use std::fmt;
use std::path::{Path, PathBuf};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Es,
    En,
}

/// Locale used when no valid preference is available.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

impl Locale {
    /// All supported locales, in switcher display order.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Two-letter code used for persistence and the `--lang` flag.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Human-readable name, in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
        }
    }

    /// Parses a stored or user-supplied code. Anything outside the
    /// supported set is `None`, never an error.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the complete dictionary for a locale. Total over the enum; a
/// locale without a dictionary cannot be expressed.
pub fn dictionary_for(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::Es => &es::ES,
        Locale::En => &en::EN,
    }
}

/// Session-wide holder of the active locale.
///
/// The active locale is only ever changed through [`LocaleState::set_locale`],
/// which also persists the choice. The dictionary is derived from the locale
/// on every read, so callers always observe a matched pair.
#[derive(Debug)]
pub struct LocaleState {
    current: Locale,
    /// Settings file override, used by tests. `None` means the platform
    /// config directory.
    config_path: Option<PathBuf>,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self {
            current: DEFAULT_LOCALE,
            config_path: None,
        }
    }
}

impl LocaleState {
    /// Restores the locale for a new session: a valid CLI override wins,
    /// then a valid persisted preference, then [`DEFAULT_LOCALE`].
    ///
    /// Best-effort and silent: an unreadable settings file or an
    /// unrecognized stored code behaves exactly like no preference at all.
    /// Restoration never writes the settings file.
    pub fn restore(cli_lang: Option<&str>) -> Self {
        let config = config::load().unwrap_or_default();
        Self {
            current: resolve_locale(cli_lang, &config).unwrap_or(DEFAULT_LOCALE),
            config_path: None,
        }
    }

    /// Like [`LocaleState::restore`], but reading and writing a specific
    /// settings file instead of the platform config directory.
    pub fn restore_from_path(path: &Path, cli_lang: Option<&str>) -> Self {
        let config = config::load_from_path(path).unwrap_or_default();
        Self {
            current: resolve_locale(cli_lang, &config).unwrap_or(DEFAULT_LOCALE),
            config_path: Some(path.to_path_buf()),
        }
    }

    pub fn locale(&self) -> Locale {
        self.current
    }

    /// The dictionary paired with the active locale.
    pub fn dictionary(&self) -> &'static Dictionary {
        dictionary_for(self.current)
    }

    /// Switches the active locale and persists the choice.
    ///
    /// The write is fire-and-forget: the in-memory locale is authoritative
    /// for the session whether or not the settings file could be saved.
    pub fn set_locale(&mut self, locale: Locale) {
        self.current = locale;
        let config = Config {
            language: Some(locale.code().to_string()),
        };
        let _ = match &self.config_path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
    }
}

fn resolve_locale(cli_lang: Option<&str>, config: &Config) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(code) = cli_lang {
        if let Some(locale) = Locale::from_code(code) {
            return Some(locale);
        }
    }

    // 2. Check persisted preference
    if let Some(code) = &config.language {
        if let Some(locale) = Locale::from_code(code) {
            return Some(locale);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_recognizes_supported_locales() {
        assert_eq!(Locale::from_code("es"), Some(Locale::Es));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("ES"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config {
            language: Some("es".to_string()),
        };
        let locale = resolve_locale(Some("en"), &config);
        assert_eq!(locale, Some(Locale::En));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            language: Some("en".to_string()),
        };
        let locale = resolve_locale(None, &config);
        assert_eq!(locale, Some(Locale::En));
    }

    #[test]
    fn resolve_locale_ignores_invalid_cli_value() {
        let config = Config {
            language: Some("en".to_string()),
        };
        let locale = resolve_locale(Some("de"), &config);
        assert_eq!(locale, Some(Locale::En));
    }

    #[test]
    fn resolve_locale_returns_none_without_preferences() {
        assert_eq!(resolve_locale(None, &Config::default()), None);
    }

    #[test]
    fn dictionary_tracks_locale_after_switch() {
        let mut state = LocaleState::default();
        assert_eq!(state.locale(), DEFAULT_LOCALE);

        // Point persistence at a throwaway file so the test cannot touch
        // the real user config.
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        state.config_path = Some(dir.path().join("settings.toml"));

        state.set_locale(Locale::En);
        assert_eq!(state.locale(), Locale::En);
        assert!(std::ptr::eq(state.dictionary(), dictionary_for(Locale::En)));
    }

    #[test]
    fn every_locale_has_a_dictionary() {
        for locale in Locale::ALL {
            // Forces the registry match arm for each variant.
            assert!(!dictionary_for(locale).hero.name.is_empty());
        }
    }
}

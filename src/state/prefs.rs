//! Local presentation preferences (theme, language).
//!
//! DESIGN
//! ======
//! Keeps persisted chrome preferences out of auth state so the dashboard
//! header controls can evolve independently of identity handling.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// UI preferences persisted under the `app_theme` / `app_language` keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefsState {
    pub dark_mode: bool,
    pub language: Language,
}

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    /// All supported languages in display order.
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::De];

    /// Persisted language code.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Parse a persisted language code; unknown values fall back to English.
    pub fn parse(raw: &str) -> Language {
        match raw.trim() {
            "es" => Language::Es,
            "fr" => Language::Fr,
            "de" => Language::De,
            _ => Language::En,
        }
    }

    /// Native-language label for the selector control.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }
}

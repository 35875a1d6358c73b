//! Language preference and the small translated strings the UI needs.
//!
//! Mirrors the theme module: the preference lives in `localStorage` under
//! `app_language`, and applying it sets the `lang` attribute on `<html>`.
//! SSR paths safely no-op.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use super::storage::{self, LANGUAGE_KEY};
use crate::state::prefs::Language;

/// Read the stored language preference; unknown or missing values read as
/// English.
pub fn read_preference() -> Language {
    storage::read_key(LANGUAGE_KEY)
        .map(|code| Language::parse(&code))
        .unwrap_or_default()
}

/// Apply the `lang` attribute on the `<html>` element.
pub fn apply(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", language.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}

/// Persist and apply a new language preference.
pub fn set(language: Language) {
    storage::write_key(LANGUAGE_KEY, language.as_str());
    apply(language);
}

/// Dashboard header greeting in the selected language.
pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::En => "Welcome back",
        Language::Es => "Bienvenido de nuevo",
        Language::Fr => "Bon retour",
        Language::De => "Willkommen zurück",
    }
}

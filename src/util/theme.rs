//! Dark mode initialization and toggle.
//!
//! Reads the preference from `localStorage` under `app_theme` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment;
//! SSR paths safely no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{self, THEME_KEY};

/// Read the dark mode preference.
///
/// Returns `true` if the user previously chose dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::read_key(THEME_KEY) {
        return stored == "dark";
    }
    system_prefers_dark()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle dark mode, persist the new preference, and apply it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    storage::write_key(THEME_KEY, if next { "dark" } else { "light" });
    apply(next);
    next
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

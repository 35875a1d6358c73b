//! Browser localStorage persistence for the session and UI preferences.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! so server rendering stays deterministic. A single tab reads and writes
//! these keys synchronously — there is no cross-tab coordination.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::{Session, User};

/// Bearer token for the signed-in user.
pub const TOKEN_KEY: &str = "company_token";
/// User record serialized as JSON text.
pub const USER_KEY: &str = "company_user";
/// Refresh token; stored alongside the session, never exchanged.
pub const REFRESH_TOKEN_KEY: &str = "company_refresh_token";
/// `"dark"` / `"light"` theme preference. Survives logout.
pub const THEME_KEY: &str = "app_theme";
/// Two-letter language code. Survives logout.
pub const LANGUAGE_KEY: &str = "app_language";

/// Read a raw string value from localStorage.
pub fn read_key(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value to localStorage.
pub fn write_key(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from localStorage.
pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Persist a session under the fixed `company_*` keys.
pub fn save_session(session: &Session) {
    write_key(TOKEN_KEY, &session.token);
    match &session.refresh_token {
        Some(refresh) => write_key(REFRESH_TOKEN_KEY, refresh),
        None => remove_key(REFRESH_TOKEN_KEY),
    }
    write_key(USER_KEY, &encode_user(&session.user));
}

/// Restore the persisted session, if both token and a decodable user exist.
pub fn load_session() -> Option<Session> {
    let token = read_key(TOKEN_KEY)?;
    let user = decode_user(&read_key(USER_KEY)?)?;
    Some(Session {
        token,
        refresh_token: read_key(REFRESH_TOKEN_KEY),
        user,
    })
}

/// Forget the persisted session. Theme and language keys survive.
pub fn clear_session() {
    remove_key(TOKEN_KEY);
    remove_key(USER_KEY);
    remove_key(REFRESH_TOKEN_KEY);
}

/// Serialize the user record to the stored JSON text form.
pub fn encode_user(user: &User) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

/// Decode a stored user record; corrupt JSON reads as absent.
pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

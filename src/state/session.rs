//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Presence of a token means
//! "authenticated" — nothing ever validates it against a server.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, User};

/// Session state tracking the current user, token, and restore status.
///
/// `loading` starts `true` and flips to `false` once the startup restore from
/// localStorage has run; route guards only redirect after that point.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Whether the current visitor is considered signed in.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a freshly persisted or restored session.
    pub fn adopt(&mut self, session: Session) {
        self.user = Some(session.user);
        self.token = Some(session.token);
        self.loading = false;
    }

    /// Drop the current identity, e.g. on logout or forced 401 logout.
    pub fn reset(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` tracks the current user and auth token for route guards;
//! `prefs` keeps local presentation preferences (theme, language).

pub mod prefs;
pub mod session;

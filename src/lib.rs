//! # portal
//!
//! Leptos + WASM front-end scaffold: a login page, a registration page, and a
//! dashboard page backed by a mock authentication layer, a centralized fetch
//! wrapper, and shared formatting/validation utilities.
//!
//! There is no server behind it — session state lives in browser localStorage
//! and the auth layer returns canned responses after a simulated delay. The
//! fetch wrapper in `net::http` is wired for a future real backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, bring up console logging, and
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

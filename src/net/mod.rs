//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the centralized fetch wrapper (timeout, retry, error
//! classification), `mock` is the canned auth/dashboard backend the pages
//! actually call, `endpoints` holds the planned REST paths, and `types` /
//! `error` define the shared payload and error schema.

pub mod endpoints;
pub mod error;
pub mod http;
pub mod mock;
pub mod types;

//! Login client module for the Fantasy Premier League service.
//!
//! This module provides the `AuthClient` for exchanging an email/password
//! pair for a session token at the FPL login endpoint, and the `AuthError`
//! taxonomy shared with the session store.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::AuthError;

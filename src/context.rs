//! Explicit dependency-injection point for the session store.
//!
//! Consumers receive an `AuthContext` by reference (or behind an `Arc`) and
//! read the store through it. Accessing a context that was never given a
//! store is a wiring mistake and fails with `ContextError::NotInstalled`
//! rather than panicking.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::auth::SessionStore;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("session store is not installed in this context")]
    NotInstalled,

    #[error("a session store is already installed in this context")]
    AlreadyInstalled,
}

/// Holds at most one session store for the lifetime of the application.
#[derive(Default)]
pub struct AuthContext {
    store: OnceLock<Arc<SessionStore>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the store. A context is installed exactly once; a second
    /// install is rejected instead of silently replacing live subscribers'
    /// store.
    pub fn install(&self, store: Arc<SessionStore>) -> Result<(), ContextError> {
        self.store
            .set(store)
            .map_err(|_| ContextError::AlreadyInstalled)
    }

    /// The installed store, or `NotInstalled` when used outside the scope
    /// that installed one.
    pub fn store(&self) -> Result<Arc<SessionStore>, ContextError> {
        self.store
            .get()
            .cloned()
            .ok_or(ContextError::NotInstalled)
    }
}

//! fplsession - authentication and session state for Fantasy Premier League clients.
//!
//! This crate holds a signed-in user's session token and profile, persists
//! them across restarts in a local key-value store, performs the credential
//! exchange against the FPL login endpoint, and publishes authentication
//! state through a watch channel so UI layers can react to changes.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fplsession::{AuthClient, FileStorage, SessionStore};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let storage = Arc::new(FileStorage::open_default()?);
//! let store = Arc::new(SessionStore::new(AuthClient::new(), storage));
//! store.hydrate();
//!
//! if !store.is_authenticated() {
//!     store.sign_in("user@example.com", "secret").await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod context;
pub mod storage;

pub use api::{AuthClient, AuthError};
pub use auth::{SessionState, SessionStore, UserRecord};
pub use context::{AuthContext, ContextError};
pub use storage::{FileStorage, MemoryStorage, Storage};

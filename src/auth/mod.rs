//! Authentication state and the session store.
//!
//! This module provides:
//! - `SessionState` / `UserRecord`: the published authentication state
//! - `SessionStore`: hydration from storage, sign-in/sign-out, and
//!   change notification via a watch channel
//!
//! Sessions are persisted under two storage keys and restored once at
//! startup; the persisted copy outlives the process until sign-out.

pub mod state;
pub mod store;

pub use state::{SessionState, UserRecord};
pub use store::SessionStore;

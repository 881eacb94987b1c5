//! Persistent key-value storage for session data.
//!
//! This module provides:
//! - `Storage`: the key-value contract the session store persists through
//! - `FileStorage`: one file per key under a local data directory
//! - `MemoryStorage`: in-process map for tests and embedders that handle
//!   persistence themselves
//!
//! Access is synchronous and local; there is no cross-process coordination
//! and no schema versioning.

pub mod file;
pub mod memory;

use anyhow::Result;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key-value store the session layer persists tokens and user records into.
///
/// `get` of an absent key is `None`; `remove` of an absent key succeeds.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

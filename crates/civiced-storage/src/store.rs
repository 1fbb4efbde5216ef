//! Key-value store abstraction
//!
//! The session engine persists everything as string keys mapped to JSON
//! strings. Keeping the contract this small lets the same logic run against
//! an in-memory map, SQLite, or a future remote session service.

use crate::Result;

pub trait KeyValueStore: Send + Sync {
    /// Look up the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

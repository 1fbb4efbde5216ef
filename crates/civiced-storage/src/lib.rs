//! CivicEd Storage Layer
//!
//! String key-value persistence for all session state. Callers program
//! against the [`KeyValueStore`] trait; the concrete store (in-memory or
//! SQLite) is chosen at construction time.

mod database;
mod error;
mod memory;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;

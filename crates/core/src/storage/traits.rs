//! Storage backend trait
//!
//! Defines the raw string-keyed storage interface, allowing for different
//! implementations (SQLite, in-memory mock).

use crate::error::Result;

/// Durable string-keyed storage
pub trait StorageBackend {
    /// Read the raw value for a key, if present
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for a key, replacing any previous value
    fn store(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; absent keys are not an error
    fn remove(&self, key: &str) -> Result<()>;
}

//! Persistent key-value storage for QuickCart state
//!
//! Wraps a durable string-keyed backend behind a typed get/set interface
//! with JSON (de)serialization. Reads that fail to parse fall back to the
//! caller's default; writes propagate their errors.

mod memory;
mod sqlite;
mod traits;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use traits::StorageBackend;

/// Storage keys for persisted state
pub mod keys {
    /// All registered accounts
    pub const USERS: &str = "quickcart_users";
    /// The active session, when remembered
    pub const SESSION: &str = "quickcart_session";
    /// Whether the active session survives restarts
    pub const REMEMBER: &str = "quickcart_remember";
    /// The cart ledger
    pub const CART: &str = "quickcart_cart";
}

/// Typed key-value store over a [`StorageBackend`]
///
/// Built by the composing application and injected into the managers that
/// need it; there is no ambient global store.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// Open a durable store at the given database path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            backend: Box::new(SqliteBackend::open(path)?),
        })
    }

    /// Open a durable store at the default platform data path
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open a store that lives only in memory (for testing)
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
        }
    }

    /// Wrap a custom backend
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Default database path under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from("dev", "quickcart", "quickcart").ok_or(Error::DataDirUnavailable)?;
        Ok(dirs.data_dir().join("quickcart.db"))
    }

    /// Read and deserialize the value for `key`
    ///
    /// An absent key, a backend read failure, or a stored value that no
    /// longer parses all yield `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored value failed to parse, using default");
                default
            }
        }
    }

    /// Serialize and write the value for `key`
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.store(key, &raw)
    }

    /// Delete the value for `key`
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key)
    }
}

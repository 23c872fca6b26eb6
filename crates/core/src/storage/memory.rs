//! In-memory storage backend for tests

use std::cell::RefCell;
use std::collections::HashMap;

use super::StorageBackend;
use crate::error::Result;

/// HashMap-backed storage; contents vanish with the value
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

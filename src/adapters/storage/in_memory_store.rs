//! In-Memory Preference Store Adapter
//!
//! Holds all preference slots in memory. Useful for testing and
//! development; nothing survives the process.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{PreferenceStore, StoreError, StoreKey};

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    dates: RwLock<HashMap<StoreKey, Timestamp>>,
    strings: RwLock<HashMap<StoreKey, String>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub fn clear(&self) {
        self.dates.write().expect("store lock poisoned").clear();
        self.strings.write().expect("store lock poisoned").clear();
    }

    /// Number of populated slots across both value kinds.
    pub fn len(&self) -> usize {
        self.dates.read().expect("store lock poisoned").len()
            + self.strings.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for InMemoryStore {
    fn load_date(&self, key: StoreKey) -> Result<Option<Timestamp>, StoreError> {
        Ok(self.dates.read().expect("store lock poisoned").get(&key).copied())
    }

    fn save_date(&self, key: StoreKey, value: Timestamp) -> Result<(), StoreError> {
        self.dates.write().expect("store lock poisoned").insert(key, value);
        Ok(())
    }

    fn load_string(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.strings.read().expect("store lock poisoned").get(&key).cloned())
    }

    fn save_string(&self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.strings
            .write()
            .expect("store lock poisoned")
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.dates.write().expect("store lock poisoned").remove(&key);
        self.strings.write().expect("store lock poisoned").remove(&key);
        Ok(())
    }
}

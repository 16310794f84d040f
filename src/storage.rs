use std::collections::HashMap;

use thiserror::Error;

use crate::constants::{HIGH_SCORE_KEY, STORAGE_KEY};

/// Errors that can occur while reading or writing persisted state
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read key {key}: {reason}")]
    ReadError { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    WriteError { key: String, reason: String },

    #[error("Invalid state data: {0}")]
    InvalidState(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// String key-value storage backing the canvas.
///
/// This is the only way the store touches persistent state, so tests can
/// hand in a [`MemoryStore`] and the app can bridge to eframe's storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_owned(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the canvas keys out of eframe's app storage
    pub fn from_eframe(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut store = Self::new();
        if let Some(storage) = storage {
            for key in [STORAGE_KEY, HIGH_SCORE_KEY] {
                if let Some(value) = storage.get_string(key) {
                    store.entries.insert(key.to_owned(), value);
                }
            }
        }
        log::debug!("Restored {} canvas entries from app storage", store.len());
        store
    }

    /// Writes every entry back into eframe's app storage
    pub fn write_to_eframe(&self, storage: &mut dyn eframe::Storage) {
        for (key, value) in &self.entries {
            storage.set_string(key, value.clone());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

//! Preference persistence.
//!
//! The only persisted state is the theme string. Storage is best effort:
//! callers log failures and carry on with a session-only value.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the operation: {0}")]
    Rejected(String),
}

/// String key/value preference storage (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Fails when the backing storage cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Fails when the backing storage cannot be reached or refuses the write.
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Map-backed store. `MemoryStore::unavailable()` fails every call, the way
/// `localStorage` does in locked-down browsing modes.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RefCell::new(BTreeMap::new()), available: true }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: RefCell::new(BTreeMap::new()), available: false }
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Stored value, bypassing availability.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(key, value)
    }
}

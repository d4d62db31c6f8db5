//! `localStorage`-backed preference store.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::storage::{PreferenceStore, StorageError};

fn rejected(err: &JsValue) -> StorageError {
    StorageError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Looks up `window.localStorage` on every call; access can be revoked at
/// runtime (private browsing, quota, site-data settings).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(err) => Err(rejected(&err)),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|err| rejected(&err))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| rejected(&err))
    }
}

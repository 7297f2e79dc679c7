//! `localStorage` persistence for the session token

use chatbot::auth::{StoreError, TokenStore};
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Token store backed by the browser's `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match LocalStorage::get::<String>(&self.key) {
            Ok(token) => Ok(Some(token)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(StoreError(e.to_string())),
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        LocalStorage::set(&self.key, token).map_err(|e| StoreError(e.to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        LocalStorage::delete(&self.key);
        Ok(())
    }
}

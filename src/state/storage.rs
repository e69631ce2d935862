//! Persistent key-value storage for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds persist to `window.localStorage`; tests and non-browser
//! builds use `MemoryStorage`. `SessionStorage` owns the two namespaced keys
//! the session is mirrored to.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (quota exceeded, storage disabled) are returned as
//! `StorageError`, never swallowed.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::auth::Session;
use super::session::SessionError;
use crate::net::types::User;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("storage remove failed for {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// Synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the key cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Every call fails with
/// [`StorageError::Unavailable`] outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// The namespaced `token`/`user` key pair the session is mirrored to.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
    token_key: String,
    user_key: String,
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage")
            .field("token_key", &self.token_key)
            .field("user_key", &self.user_key)
            .finish_non_exhaustive()
    }
}

impl SessionStorage {
    /// Keys become `<namespace>:token` and `<namespace>:user`.
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            store,
            token_key: format!("{namespace}:token"),
            user_key: format!("{namespace}:user"),
        }
    }

    #[must_use]
    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    #[must_use]
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// Read the stored session. `None` unless both keys are present.
    ///
    /// # Errors
    ///
    /// [`SessionError::Storage`] when the store cannot be read and
    /// [`SessionError::CorruptSession`] when the user is not valid JSON.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let token = self.store.get(&self.token_key)?;
        let user = self.store.get(&self.user_key)?;
        let (Some(token), Some(raw_user)) = (token, user) else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw_user).map_err(|e| SessionError::CorruptSession {
            key: self.user_key.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(Session { token, user }))
    }

    /// Write both keys. When the user write fails the token key is put
    /// back to what it held before, so the stored pair never mixes two
    /// sessions.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] hit.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let previous_token = self.store.get(&self.token_key)?;
        self.store.set(&self.token_key, &session.token)?;
        self.save_user(&session.user).inspect_err(|_| self.restore_token(previous_token.as_deref()))
    }

    /// Rewrite the user key only.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write fails.
    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Write {
            key: self.user_key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&self.user_key, &raw)
    }

    /// Remove both keys. When the user key cannot be removed the token key
    /// is restored, leaving storage as it was.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] hit.
    pub fn clear(&self) -> Result<(), StorageError> {
        let previous_token = self.store.get(&self.token_key)?;
        self.store.remove(&self.token_key)?;
        self.store.remove(&self.user_key).inspect_err(|_| self.restore_token(previous_token.as_deref()))
    }

    fn restore_token(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(token) => self.store.set(&self.token_key, token),
            None => self.store.remove(&self.token_key),
        };
        if let Err(err) = restored {
            log::error!("failed to restore {} after a partial write: {err}", self.token_key);
        }
    }
}

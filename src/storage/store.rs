//! Typed store over a key-value backend.
//!
//! Wraps a `StorageBackend` with JSON encoding and typed accessors for the
//! three persisted keys: the session user, the user registry, and the
//! workout log.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::backend::StorageBackend;
use crate::auth::types::User;
use crate::workouts::types::Workout;

/// Names of the persisted keys.
pub mod keys {
    /// The currently logged-in user, if any.
    pub const CURRENT_USER: &str = "currentUser";
    /// The array of registered users.
    pub const USERS: &str = "users";
    /// The array of logged workouts.
    pub const WORKOUTS: &str = "workouts";
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Typed repository over a storage backend.
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    /// Create a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Decode the JSON value for a key, or `None` if the key is absent.
    /// Malformed JSON is reported as a parse error, not silently dropped.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Parse(format!("{key}: {e}"))),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and write it under a key.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(key, &raw)
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    // ========== Typed accessors for the persisted keys ==========

    /// Load the user registry. An absent key is an empty registry.
    pub fn users(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.get_json(keys::USERS)?.unwrap_or_default())
    }

    /// Persist the whole user registry.
    pub fn save_users(&mut self, users: &[User]) -> Result<(), StorageError> {
        self.set_json(keys::USERS, &users)
    }

    /// Load the workout log. An absent key is an empty log.
    pub fn workouts(&self) -> Result<Vec<Workout>, StorageError> {
        Ok(self.get_json(keys::WORKOUTS)?.unwrap_or_default())
    }

    /// Persist the whole workout log.
    pub fn save_workouts(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        self.set_json(keys::WORKOUTS, &workouts)
    }

    /// Load the session user, if one is stored.
    pub fn current_user(&self) -> Result<Option<User>, StorageError> {
        self.get_json(keys::CURRENT_USER)
    }

    /// Persist the session user.
    pub fn set_current_user(&mut self, user: &User) -> Result<(), StorageError> {
        self.set_json(keys::CURRENT_USER, user)
    }

    /// Clear the session user.
    pub fn clear_current_user(&mut self) -> Result<(), StorageError> {
        self.remove(keys::CURRENT_USER)
    }
}

//! Login and signup against the local user registry.

use thiserror::Error;

use super::types::User;
use crate::ids::timestamp_id;
use crate::storage::{StorageBackend, StorageError, Store};

/// Authentication errors. Messages are the user-facing strings the forms
/// display inline.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("All fields are required")]
    MissingFields,

    #[error("Email already exists")]
    EmailExists,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Look up a user by exact email match and compare the password.
pub fn login<B: StorageBackend>(
    store: &Store<B>,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let users = store.users()?;

    let user = users
        .into_iter()
        .find(|u| u.email == email)
        .ok_or(AuthError::InvalidCredentials)?;

    if user.password != password {
        return Err(AuthError::InvalidCredentials);
    }

    tracing::debug!(email, "User logged in");
    Ok(user)
}

/// Register a new user. Fails without touching the registry if any field
/// is empty or the email is already taken.
pub fn signup<B: StorageBackend>(
    store: &mut Store<B>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }

    let mut users = store.users()?;

    if users.iter().any(|u| u.email == email) {
        return Err(AuthError::EmailExists);
    }

    let user = User {
        id: timestamp_id(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    users.push(user.clone());
    store.save_users(&users)?;

    tracing::info!(email, "Registered new user");
    Ok(user)
}

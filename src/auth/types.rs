//! User account types.

use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// The password is stored in plaintext: this is a local demo registry with
/// no security boundary, not a credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Timestamp-derived identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address, unique within the registry
    pub email: String,
    /// Plaintext password
    pub password: String,
}

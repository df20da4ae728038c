//! Account records.
//!
//! [`User`] deliberately does not implement `Serialize`: the password hash must
//! never cross the HTTP boundary. Convert to [`PublicUser`] before responding.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::{EntityId, Timestamp};

/// A registered account as held by the credential store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: EntityId,
    /// Always lowercase.
    pub email: String,
    /// Opaque one-way credential (argon2 PHC string in practice).
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// Input for creating a user. The email is normalized by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    /// Free-form role input, coerced via [`Role::coerce`].
    pub role: Option<String>,
}

/// Redacted wire shape of a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: Timestamp,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Canonical form of an email address used for indexing and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

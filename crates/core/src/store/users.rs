use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::{new_id, EntityId};
use crate::user::{normalize_email, NewUser, User};

#[derive(Default)]
struct UserIndex {
    by_id: HashMap<EntityId, User>,
    /// Normalized email -> user id.
    by_email: HashMap<String, EntityId>,
}

/// Account records keyed by id and by normalized email.
///
/// Both indices sit under one lock so they can never disagree.
#[derive(Default)]
pub struct CredentialStore {
    index: RwLock<UserIndex>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Fails with [`CoreError::Conflict`] if the email is
    /// already taken under any casing.
    pub async fn create(&self, input: NewUser) -> Result<User, CoreError> {
        let email = normalize_email(&input.email);

        let mut index = self.index.write().await;
        if index.by_email.contains_key(&email) {
            return Err(CoreError::Conflict("Email already registered".into()));
        }

        let user = User {
            id: new_id(),
            email,
            password_hash: input.password_hash,
            name: input.name,
            role: Role::coerce(input.role.as_deref()),
            created_at: Utc::now(),
        };
        index.by_email.insert(user.email.clone(), user.id.clone());
        index.by_id.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    pub async fn get_by_id(&self, id: &str) -> Option<User> {
        self.index.read().await.by_id.get(id).cloned()
    }

    /// Case-insensitive lookup.
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        let index = self.index.read().await;
        index
            .by_email
            .get(&email)
            .and_then(|id| index.by_id.get(id))
            .cloned()
    }

    pub async fn get_by_id_or_fail(&self, id: &str) -> Result<User, CoreError> {
        self.get_by_id(id)
            .await
            .ok_or_else(|| CoreError::not_found("User", id))
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.index.read().await.by_id.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn reset(&self) {
        let mut index = self.index.write().await;
        index.by_id.clear();
        index.by_email.clear();
    }
}

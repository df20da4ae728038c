//! In-memory record stores.
//!
//! Each store owns its indices behind a single `tokio::sync::RwLock`, so every
//! mutation is applied atomically and readers always receive cloned, complete
//! records. State lives for the lifetime of the process; [`Stores::reset`]
//! exists for test isolation and administrative tooling only.

pub mod events;
pub mod users;

use std::sync::Arc;

pub use events::EventStore;
pub use users::CredentialStore;

/// Cheaply cloneable handle to both stores.
#[derive(Clone, Default)]
pub struct Stores {
    pub users: Arc<CredentialStore>,
    pub events: Arc<EventStore>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every store.
    pub async fn reset(&self) {
        self.users.reset().await;
        self.events.reset().await;
    }
}

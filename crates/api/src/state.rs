use std::sync::Arc;

use eventhub_core::store::Stores;
use eventhub_notify::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Credential and event stores.
    pub stores: Stores,
    pub config: Arc<ServerConfig>,
    /// Registration notification channel (SMTP or log-only).
    pub notifier: Arc<dyn Notifier>,
}

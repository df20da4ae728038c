//! The notification seam and its detached dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use eventhub_core::event::Event;
use tokio::task::JoinHandle;

use crate::email::EmailError;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("Notification failed: {0}")]
    Other(String),
}

/// Delivers user-facing notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell `to_email` that they are registered for `event`.
    async fn send_registration(&self, to_email: &str, event: &Event) -> Result<(), NotifyError>;
}

/// Subject and plain-text body of a registration confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationMessage {
    pub subject: String,
    pub body: String,
}

pub fn registration_message(event: &Event) -> RegistrationMessage {
    let mut body = format!(
        "You have successfully registered for \"{}\" on {} at {}.",
        event.title, event.date, event.time
    );
    if !event.description.is_empty() {
        body.push_str("\n\n");
        body.push_str(&event.description);
    }
    RegistrationMessage {
        subject: format!("You are registered for: {}", event.title),
        body,
    }
}

/// Writes notifications to the log instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_registration(&self, to_email: &str, event: &Event) -> Result<(), NotifyError> {
        let message = registration_message(event);
        tracing::info!(to = to_email, subject = %message.subject, "Registration email (not sent)");
        Ok(())
    }
}

/// Send a registration notification on a detached task.
///
/// Failures are logged and never surface to the caller. The returned handle
/// may be dropped; the task keeps running.
pub fn dispatch(notifier: Arc<dyn Notifier>, to_email: String, event: Event) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.send_registration(&to_email, &event).await {
            Ok(()) => {
                tracing::debug!(to = %to_email, event_id = %event.id, "Registration notification delivered");
            }
            Err(e) => {
                tracing::warn!(
                    to = %to_email,
                    event_id = %event.id,
                    error = %e,
                    "Failed to send registration notification",
                );
            }
        }
    })
}

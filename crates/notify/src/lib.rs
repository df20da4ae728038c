//! Outbound notifications for the event-management backend.
//!
//! - [`Notifier`] -- the delivery seam used by the registration workflow.
//! - [`EmailDelivery`] -- SMTP delivery via `lettre`.
//! - [`LogNotifier`] -- log-only fallback when SMTP is not configured.
//! - [`dispatch`] -- detached, fire-and-forget delivery.

pub mod email;
pub mod notifier;

pub use email::{EmailConfig, EmailDelivery, EmailError};
pub use notifier::{dispatch, registration_message, LogNotifier, Notifier, NotifyError};

//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- resolves the principal from a Bearer token.
//! - [`rbac::RequireOrganizer`] -- requires the `organizer` role.
//! - [`rbac::EventOwner`] -- requires the principal to organize the target event.

pub mod auth;
pub mod rbac;

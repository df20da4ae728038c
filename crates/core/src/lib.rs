//! Domain core for the event-management backend.
//!
//! - [`store`] -- in-memory credential and event stores.
//! - [`policy`] -- role and ownership authorization checks.
//! - [`validation`] -- request-shape checks applied before the stores.
//! - [`error`] -- the [`CoreError`](error::CoreError) taxonomy shared by every layer.

pub mod error;
pub mod event;
pub mod policy;
pub mod roles;
pub mod store;
pub mod types;
pub mod user;
pub mod validation;

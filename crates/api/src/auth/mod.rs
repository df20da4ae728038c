//! Credential primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session token issuing and verification.

pub mod jwt;
pub mod password;

//! Request-shape checks.
//!
//! These run before any store operation and only guarantee well-formed
//! primitive fields. Inputs are expected to be trimmed already. All failures
//! for one request are reported together, joined with `"; "`.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::event::EventUpdate;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.0.push(message.into());
        }
    }

    fn email(&mut self, email: &str) {
        if email.is_empty() {
            self.0.push("Email is required".into());
        } else if !email.validate_email() {
            self.0.push("Invalid email format".into());
        }
    }

    fn finish(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.0.join("; ")))
        }
    }
}

/// Check a registration request. The role is never validated.
pub fn validate_registration(email: &str, password: &str, name: &str) -> Result<(), CoreError> {
    let mut problems = Problems::default();
    problems.email(email);
    if password.is_empty() {
        problems.0.push("Password is required".into());
    } else {
        problems.check(
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
    problems.check(!name.is_empty(), "Name is required");
    problems.finish()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    let mut problems = Problems::default();
    problems.email(email);
    problems.check(!password.is_empty(), "Password is required");
    problems.finish()
}

pub fn validate_new_event(title: &str, date: &str, time: &str) -> Result<(), CoreError> {
    let mut problems = Problems::default();
    problems.check(!title.is_empty(), "Title is required");
    problems.check(!date.is_empty(), "Date is required");
    problems.check(!time.is_empty(), "Time is required");
    problems.finish()
}

/// Present title/date/time fields must be non-empty; description may be empty.
pub fn validate_event_update(update: &EventUpdate) -> Result<(), CoreError> {
    let mut problems = Problems::default();
    let non_empty = |field: &Option<String>| field.as_deref().map_or(true, |v| !v.is_empty());
    problems.check(non_empty(&update.title), "Title cannot be empty");
    problems.check(non_empty(&update.date), "Date cannot be empty");
    problems.check(non_empty(&update.time), "Time cannot be empty");
    problems.finish()
}

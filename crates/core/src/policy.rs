//! Authorization checks.
//!
//! Both checks are pure functions of the principal and the resource. They
//! assume authentication already happened.

use crate::error::CoreError;
use crate::event::Event;
use crate::roles::Role;
use crate::user::User;

/// Reject unless the principal holds exactly `role`.
pub fn require_role(principal: &User, role: Role) -> Result<(), CoreError> {
    if principal.role == role {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!("Role '{role}' required")))
    }
}

/// Reject unless the principal organizes `event`.
pub fn require_owner(principal: &User, event: &Event) -> Result<(), CoreError> {
    if event.is_organized_by(&principal.id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Only the event organizer can modify this event".into(),
        ))
    }
}

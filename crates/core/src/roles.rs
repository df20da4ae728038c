//! Account roles.
//!
//! Only two roles exist. Free-form role input is never rejected: anything that
//! is not exactly `organizer` becomes [`Role::Attendee`].

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ROLE_ORGANIZER: &str = "organizer";
pub const ROLE_ATTENDEE: &str = "attendee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Organizer,
    #[default]
    Attendee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Organizer => ROLE_ORGANIZER,
            Role::Attendee => ROLE_ATTENDEE,
        }
    }

    /// Map optional user input onto a known role, defaulting to attendee.
    pub fn coerce(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some(ROLE_ORGANIZER) => Role::Organizer,
            _ => Role::Attendee,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

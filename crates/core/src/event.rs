//! Event records and their mutation inputs.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// An organized event. Serialized as-is on the wire (camelCase fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Opaque date string; no calendar validation is applied.
    pub date: String,
    /// Opaque time string; no calendar validation is applied.
    pub time: String,
    /// Id of the creating user. Never changes after creation.
    pub organizer_id: EntityId,
    /// Registered participants, free of duplicates.
    pub participant_ids: Vec<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }

    pub fn is_organized_by(&self, user_id: &str) -> bool {
        self.organizer_id == user_id
    }

    /// Refresh `updated_at`, strictly advancing it even if the clock has not moved.
    pub(crate) fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Input for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    /// Defaults to the empty string.
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub organizer_id: EntityId,
}

/// Partial update of an event's editable fields.
///
/// `None` means "leave untouched". `Some("")` is a real update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl EventUpdate {
    pub(crate) fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
    }
}

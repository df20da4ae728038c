/// Record identifiers are opaque strings (UUID v4 text when generated here).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, unique record identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

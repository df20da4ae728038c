use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::event::{Event, EventUpdate, NewEvent};
use crate::types::{new_id, EntityId};

const ENTITY: &str = "Event";

/// Event records keyed by id, kept in insertion order.
#[derive(Default)]
pub struct EventStore {
    events: RwLock<IndexMap<EntityId, Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new event with a fresh id and an empty participant set.
    pub async fn create(&self, input: NewEvent) -> Event {
        let now = Utc::now();
        let event = Event {
            id: new_id(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            date: input.date,
            time: input.time,
            organizer_id: input.organizer_id,
            participant_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.events
            .write()
            .await
            .insert(event.id.clone(), event.clone());
        event
    }

    /// Snapshot of every current event.
    pub async fn get_all(&self) -> Vec<Event> {
        self.events.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Event> {
        self.events.read().await.get(id).cloned()
    }

    pub async fn get_by_id_or_fail(&self, id: &str) -> Result<Event, CoreError> {
        self.get_by_id(id)
            .await
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Apply the present fields of `changes`. `updated_at` is refreshed even
    /// when `changes` is empty.
    pub async fn update(&self, id: &str, changes: EventUpdate) -> Result<Event, CoreError> {
        self.mutate(id, |event| {
            changes.apply(event);
            event.touch();
        })
        .await
    }

    pub async fn remove(&self, id: &str) -> Result<(), CoreError> {
        self.events
            .write()
            .await
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Add `user_id` to the participant set. Repeating the call is a no-op that
    /// leaves `updated_at` untouched.
    pub async fn add_participant(&self, event_id: &str, user_id: &str) -> Result<Event, CoreError> {
        self.mutate(event_id, |event| {
            if !event.has_participant(user_id) {
                event.participant_ids.push(user_id.to_string());
                event.touch();
            }
        })
        .await
    }

    /// Add `user_id` as a new participant, failing with `Conflict` if they are
    /// already registered. The check and the insert happen under one write
    /// lock, so concurrent attempts by the same user admit exactly one.
    pub async fn register_participant(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Event, CoreError> {
        let mut events = self.events.write().await;
        let event = events
            .get_mut(event_id)
            .ok_or_else(|| CoreError::not_found(ENTITY, event_id))?;
        if event.has_participant(user_id) {
            return Err(CoreError::Conflict(
                "Already registered for this event".into(),
            ));
        }
        event.participant_ids.push(user_id.to_string());
        event.touch();
        Ok(event.clone())
    }

    /// Remove `user_id` from the participant set if present. `updated_at` is
    /// refreshed either way.
    pub async fn remove_participant(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Event, CoreError> {
        self.mutate(event_id, |event| {
            event.participant_ids.retain(|id| id != user_id);
            event.touch();
        })
        .await
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn reset(&self) {
        self.events.write().await.clear();
    }

    async fn mutate<F>(&self, id: &str, f: F) -> Result<Event, CoreError>
    where
        F: FnOnce(&mut Event),
    {
        let mut events = self.events.write().await;
        let event = events
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
        f(event);
        Ok(event.clone())
    }
}

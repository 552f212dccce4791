use fairsplit_application::{Event, EventRepository, RepositoryError};
use fairsplit_domain::{Activity, ActivityId, EventId, Participant, ParticipantId, UserId};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    events: Vec<Event>,
    participants: Vec<Participant>,
    activities: Vec<Activity>,
}

/// Event storage held in memory. Rows keep insertion order, and upserts
/// replace a row in place.
#[derive(Default)]
pub struct InMemoryEventStore {
    tables: RwLock<Tables>,
}

fn upsert<T>(rows: &mut Vec<T>, row: T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|existing| same(existing)) {
        Some(existing) => *existing = row,
        None => rows.push(row),
    }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError("event store lock poisoned".to_owned()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError("event store lock poisoned".to_owned()))
    }

    pub fn save_event(&self, event: Event) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        let id = event.id.clone();
        upsert(&mut tables.events, event, |existing| existing.id == id);
        Ok(())
    }

    pub fn save_participant(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        let id = participant.id.clone();
        upsert(&mut tables.participants, participant, |existing| {
            existing.id == id
        });
        Ok(())
    }

    pub fn save_activity(&self, activity: Activity) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        let id = activity.id.clone();
        upsert(&mut tables.activities, activity, |existing| existing.id == id);
        Ok(())
    }

    /// Returns whether a row was removed.
    pub fn delete_activity(&self, activity_id: &ActivityId) -> Result<bool, RepositoryError> {
        let mut tables = self.write()?;
        let before = tables.activities.len();
        tables.activities.retain(|activity| &activity.id != activity_id);
        Ok(tables.activities.len() != before)
    }

    /// Removes the participant from every activity it shares. Activities it
    /// paid for, and activities left without participants, are removed too.
    pub fn delete_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<bool, RepositoryError> {
        let mut tables = self.write()?;
        let before = tables.participants.len();
        tables
            .participants
            .retain(|participant| &participant.id != participant_id);
        if tables.participants.len() == before {
            return Ok(false);
        }

        for activity in &mut tables.activities {
            activity.participants.retain(|id| id != participant_id);
        }
        let activity_count = tables.activities.len();
        tables.activities.retain(|activity| {
            &activity.paid_by != participant_id && !activity.participants.is_empty()
        });

        tracing::debug!(
            participant = %participant_id,
            dropped_activities = activity_count - tables.activities.len(),
            "Participant deleted"
        );
        Ok(true)
    }

    /// Removes the event with all of its participants and activities.
    pub fn delete_event(&self, event_id: &EventId) -> Result<bool, RepositoryError> {
        let mut tables = self.write()?;
        let before = tables.events.len();
        tables.events.retain(|event| &event.id != event_id);
        if tables.events.len() == before {
            return Ok(false);
        }
        tables
            .participants
            .retain(|participant| &participant.event_id != event_id);
        tables
            .activities
            .retain(|activity| &activity.event_id != event_id);
        tracing::debug!(event = %event_id, "Event deleted");
        Ok(true)
    }

    pub fn events_by_creator(&self, user_id: &UserId) -> Result<Vec<Event>, RepositoryError> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter(|event| &event.created_by == user_id)
            .cloned()
            .collect())
    }
}

impl EventRepository for InMemoryEventStore {
    fn find_event(&self, event_id: &EventId) -> Result<Option<Event>, RepositoryError> {
        Ok(self
            .read()?
            .events
            .iter()
            .find(|event| &event.id == event_id)
            .cloned())
    }

    fn participants_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<Participant>, RepositoryError> {
        Ok(self
            .read()?
            .participants
            .iter()
            .filter(|participant| &participant.event_id == event_id)
            .cloned()
            .collect())
    }

    fn activities_for_event(&self, event_id: &EventId) -> Result<Vec<Activity>, RepositoryError> {
        Ok(self
            .read()?
            .activities
            .iter()
            .filter(|activity| &activity.event_id == event_id)
            .cloned()
            .collect())
    }
}

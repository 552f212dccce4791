use crate::memory_store::InMemoryEventStore;
use fairsplit_application::{Event, RepositoryError};
use fairsplit_domain::{Activity, Participant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One event with its participants and activities, in storage order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub event: Event,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl EventSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_store(self) -> Result<InMemoryEventStore, SnapshotError> {
        let store = InMemoryEventStore::new();
        store.save_event(self.event)?;
        for participant in self.participants {
            store.save_participant(participant)?;
        }
        for activity in self.activities {
            store.save_activity(activity)?;
        }
        Ok(store)
    }
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<EventSnapshot, SnapshotError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = EventSnapshot::from_json(&json)?;
    tracing::debug!(
        path = %path.display(),
        event = %snapshot.event.id,
        participant_count = snapshot.participants.len(),
        activity_count = snapshot.activities.len(),
        "Snapshot loaded"
    );
    Ok(snapshot)
}

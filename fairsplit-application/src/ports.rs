use crate::{error::RepositoryError, model::Event};
use fairsplit_domain::{Activity, EventId, Participant};

/// Storage collaborator. Participants and activities come back in storage
/// order, which decides settlement tie-breaks.
pub trait EventRepository: Send + Sync {
    fn find_event(&self, event_id: &EventId) -> Result<Option<Event>, RepositoryError>;

    fn participants_for_event(&self, event_id: &EventId)
    -> Result<Vec<Participant>, RepositoryError>;

    fn activities_for_event(&self, event_id: &EventId) -> Result<Vec<Activity>, RepositoryError>;
}

use fairsplit_domain::{EventId, SettlementError, UserId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Storage failure: {0}")]
pub struct RepositoryError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("Event {0} not found")]
    EventNotFound(EventId),
    #[error("User {user} may not view event {event}")]
    AccessDenied { user: UserId, event: EventId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}

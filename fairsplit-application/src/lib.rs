#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod session;
pub mod settlement_service;

pub use error::{ApplicationError, RepositoryError};
pub use model::{Event, EventReport, ParticipantBalance};
pub use ports::EventRepository;
pub use session::{Role, SessionContext};
pub use settlement_service::SettlementService;

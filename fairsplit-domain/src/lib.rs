#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{ErrorKind, SettlementError};
pub use model::{
    Activity, ActivityId, BalanceSheet, EventId, Money, Participant, ParticipantId, Settlement,
    UserId,
};
pub use services::{
    BalanceAggregator, ExpenseSummary, ParticipantTotals, RoundingMode, SettlementContext,
    SettlementEngine, SettlementMatcher, UnknownParticipantPolicy, calculate_settlements,
    summarize,
};

pub mod balance_aggregator;
pub mod expense_summary;
pub mod settlement_engine;
pub mod settlement_matcher;
pub mod settlement_rounding;

pub use balance_aggregator::BalanceAggregator;
pub use expense_summary::{ExpenseSummary, ParticipantTotals, summarize};
pub use settlement_engine::{SettlementEngine, calculate_settlements};
pub use settlement_matcher::SettlementMatcher;
pub use settlement_rounding::{
    RoundingMode, SettlementContext, UnknownParticipantPolicy, check_conservation,
    conservation_tolerance,
};

use crate::model::{ActivityId, Money, ParticipantId};
use thiserror::Error;

/// Coarse classification of [`SettlementError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied records that contradict each other.
    InvalidInput,
    /// An activity cannot be split at all.
    PreconditionFailed,
    /// The engine broke one of its own guarantees.
    InternalInvariantViolation,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Participant {participant} is listed more than once")]
    DuplicateParticipant { participant: ParticipantId },
    #[error("Activity {activity} lists participant {participant} more than once")]
    DuplicateShareParticipant {
        activity: ActivityId,
        participant: ParticipantId,
    },
    #[error("Activity {activity} references unknown participant {participant}")]
    UnknownParticipant {
        activity: ActivityId,
        participant: ParticipantId,
    },
    #[error("Activity {activity} must have a positive amount (found {amount})")]
    NonPositiveAmount { activity: ActivityId, amount: Money },
    #[error("Activity {activity} has no participants to share the cost")]
    EmptyShare { activity: ActivityId },
    #[error("Activity {activity} pushes a balance or the expense total out of range")]
    AmountOverflow { activity: ActivityId },
    #[error("Settlement scale {scale} is not supported (max {max_supported})")]
    UnsupportedScale { scale: u32, max_supported: u32 },
    #[error("Balances do not sum to zero (found {total})")]
    ImbalancedTotal { total: Money },
}

impl SettlementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettlementError::DuplicateParticipant { .. }
            | SettlementError::DuplicateShareParticipant { .. }
            | SettlementError::UnknownParticipant { .. }
            | SettlementError::AmountOverflow { .. }
            | SettlementError::UnsupportedScale { .. } => ErrorKind::InvalidInput,
            SettlementError::NonPositiveAmount { .. } | SettlementError::EmptyShare { .. } => {
                ErrorKind::PreconditionFailed
            }
            SettlementError::ImbalancedTotal { .. } => ErrorKind::InternalInvariantViolation,
        }
    }
}

//! Rounding and tolerance rules shared by the aggregator and the matcher.
//!
//! Balances are kept at full decimal precision; only the amounts reported in
//! settlements are rounded to the atomic unit (e.g., 0.01 for cents). The
//! same atomic unit doubles as the emission threshold: a settlement must be
//! strictly larger than one unit to be reported.

use crate::{
    error::SettlementError,
    model::{BalanceSheet, Money},
};
use rust_decimal::{Decimal, RoundingStrategy};

const MAX_SETTLEMENT_SCALE: u32 = 22;
const CONSERVATION_TOLERANCE_SCALE: u32 = 6;
/// Smallest step a 28-digit decimal can represent.
const DECIMAL_RESOLUTION_SCALE: u32 = 28;

/// Rounding mode for reported settlement amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.125 -> 0.13, -0.125 -> -0.13).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// What the aggregator does with an activity that names a participant id
/// missing from the participant list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownParticipantPolicy {
    /// Fail the aggregation with [`SettlementError::UnknownParticipant`].
    #[default]
    Reject,
    /// Append a balance entry for the id, in first-seen order.
    Extend,
}

/// Context for settlement computation.
///
/// # Example
/// ```
/// use fairsplit_domain::services::{RoundingMode, SettlementContext, UnknownParticipantPolicy};
///
/// let ctx = SettlementContext {
///     scale: 2,
///     rounding_mode: RoundingMode::HalfEven,
///     unknown_participants: UnknownParticipantPolicy::Reject,
/// };
/// assert_eq!(ctx.min_settlement().to_string(), "0.01");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    /// Number of decimal places of the atomic unit (2 for cents).
    pub scale: u32,
    /// Rounding strategy for reported amounts.
    pub rounding_mode: RoundingMode,
    pub unknown_participants: UnknownParticipantPolicy,
}

impl SettlementContext {
    /// Cent-based context: scale 2, half-up rounding, unknown ids rejected.
    pub fn cents_default() -> Self {
        Self {
            scale: 2,
            rounding_mode: RoundingMode::HalfUp,
            unknown_participants: UnknownParticipantPolicy::Reject,
        }
    }

    pub fn validate(self) -> Result<Self, SettlementError> {
        if self.scale <= MAX_SETTLEMENT_SCALE {
            return Ok(self);
        }
        Err(SettlementError::UnsupportedScale {
            scale: self.scale,
            max_supported: MAX_SETTLEMENT_SCALE,
        })
    }

    /// The atomic unit; settlements must exceed it to be emitted.
    pub fn min_settlement(self) -> Money {
        Money::new(1, self.scale)
    }

    pub fn round(self, amount: Money) -> Money {
        amount.round_dp_with_strategy(self.scale, self.rounding_mode.strategy())
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self::cents_default()
    }
}

/// Largest acceptable drift of a balance total: relative to the expense
/// volume, but never below one decimal step per share debit.
pub fn conservation_tolerance(volume: Money, debit_count: usize) -> Money {
    let relative = volume.abs().as_decimal() * Decimal::new(1, CONSERVATION_TOLERANCE_SCALE);
    let floor = Decimal::new(1, DECIMAL_RESOLUTION_SCALE)
        .checked_mul(Decimal::from(debit_count))
        .unwrap_or(Decimal::MAX);
    Money::from_decimal(relative.max(floor))
}

/// Checks that `balances` sums to zero within [`conservation_tolerance`].
pub fn check_conservation(
    balances: &BalanceSheet,
    volume: Money,
    debit_count: usize,
) -> Result<(), SettlementError> {
    let total = balances.total();
    if total.abs() > conservation_tolerance(volume, debit_count) {
        return Err(SettlementError::ImbalancedTotal { total });
    }
    Ok(())
}

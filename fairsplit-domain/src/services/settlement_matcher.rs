use crate::{
    error::SettlementError,
    model::{BalanceSheet, Money, ParticipantId, Settlement},
    services::settlement_rounding::SettlementContext,
};
use rust_decimal::Decimal;

/// Greedy debtor/creditor matching service.
///
/// Debtors are processed in balance-sheet order and each one drains
/// creditors in balance-sheet order. The result is deterministic and linear
/// in `debtors × creditors`, but it is not guaranteed to use the minimum
/// possible number of transactions.
pub struct SettlementMatcher {
    context: SettlementContext,
}

impl SettlementMatcher {
    pub fn new(context: SettlementContext) -> Result<Self, SettlementError> {
        Ok(Self {
            context: context.validate()?,
        })
    }

    /// Produce the payments that zero out `balances`.
    ///
    /// A pair is only emitted when its amount strictly exceeds the atomic
    /// unit of the context. Reported amounts are rounded; the running
    /// remainders stay unrounded so rounding error does not compound across
    /// creditors.
    pub fn match_balances(&self, balances: &BalanceSheet) -> Vec<Settlement> {
        let threshold = self.context.min_settlement();
        let debtors: Vec<(&ParticipantId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_negative())
            .collect();
        let mut creditors: Vec<(&ParticipantId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_positive())
            .collect();

        let mut settlements = Vec::new();

        for (debtor, balance) in debtors {
            let mut remaining = balance.abs();

            for (creditor, credit) in creditors.iter_mut() {
                if remaining.is_zero() || !credit.is_positive() {
                    continue;
                }

                let amount = remaining.min(*credit);
                if amount <= threshold {
                    continue;
                }

                let reported = self.context.round(amount);
                tracing::trace!(
                    from = %debtor,
                    to = %creditor,
                    amount = %amount,
                    reported = %reported,
                    "Settlement emitted"
                );
                settlements.push(Settlement {
                    from: debtor.clone(),
                    to: (*creditor).clone(),
                    amount: reported,
                });

                remaining -= amount;
                *credit -= amount;
            }

            self.check_residue(debtor, remaining, creditors.len());
        }

        tracing::debug!(
            member_count = balances.len(),
            creditor_count = creditors.len(),
            settlement_count = settlements.len(),
            "Settlement matching finished"
        );

        settlements
    }

    /// Each creditor skipped by the threshold strands at most one atomic
    /// unit; one more unit covers decimal division drift.
    fn check_residue(&self, debtor: &ParticipantId, remaining: Money, creditor_count: usize) {
        if remaining.is_zero() {
            return;
        }

        let unit = self.context.min_settlement().as_decimal();
        let bound = Money::from_decimal(unit * Decimal::from(creditor_count + 1));
        if remaining > bound {
            tracing::error!(
                reject_reason = "unmatched_debt",
                debtor = %debtor,
                remaining = %remaining,
                bound = %bound,
                "Debtor left with unmatched debt; balances do not sum to zero"
            );
        } else {
            tracing::debug!(
                debtor = %debtor,
                remaining = %remaining,
                "Sub-threshold residue left unsettled"
            );
        }
        debug_assert!(remaining <= bound, "debt left unmatched beyond threshold residue");
    }
}

impl Default for SettlementMatcher {
    fn default() -> Self {
        Self {
            context: SettlementContext::cents_default(),
        }
    }
}

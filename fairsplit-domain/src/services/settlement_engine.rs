use crate::{
    error::SettlementError,
    model::{Activity, BalanceSheet, Participant, Settlement},
    services::{
        balance_aggregator::BalanceAggregator, settlement_matcher::SettlementMatcher,
        settlement_rounding::SettlementContext,
    },
};

/// Aggregate-then-match pipeline. Always recomputes from the full input.
pub struct SettlementEngine {
    aggregator: BalanceAggregator,
    matcher: SettlementMatcher,
}

impl SettlementEngine {
    pub fn new(context: SettlementContext) -> Result<Self, SettlementError> {
        let context = context.validate()?;
        Ok(Self {
            aggregator: BalanceAggregator::new(context),
            matcher: SettlementMatcher::new(context)?,
        })
    }

    pub fn balances(
        &self,
        participants: &[Participant],
        activities: &[Activity],
    ) -> Result<BalanceSheet, SettlementError> {
        self.aggregator.aggregate(participants, activities)
    }

    pub fn settle(
        &self,
        participants: &[Participant],
        activities: &[Activity],
    ) -> Result<Vec<Settlement>, SettlementError> {
        let balances = self.balances(participants, activities)?;
        Ok(self.matcher.match_balances(&balances))
    }

    pub fn match_balances(&self, balances: &BalanceSheet) -> Vec<Settlement> {
        self.matcher.match_balances(balances)
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self {
            aggregator: BalanceAggregator::new(SettlementContext::cents_default()),
            matcher: SettlementMatcher::default(),
        }
    }
}

/// Settlements for `activities` under the cent-based default context.
pub fn calculate_settlements(
    participants: &[Participant],
    activities: &[Activity],
) -> Result<Vec<Settlement>, SettlementError> {
    SettlementEngine::default().settle(participants, activities)
}

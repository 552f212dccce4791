use crate::model::{Activity, Money, Participant, ParticipantId};
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantTotals {
    pub id: ParticipantId,
    /// Sum of activity amounts this participant fronted.
    pub paid: Money,
    /// Sum of equal shares this participant consumed.
    pub consumed: Money,
}

impl ParticipantTotals {
    pub fn net(&self) -> Money {
        self.paid - self.consumed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub total_expense: Money,
    pub participants: Vec<ParticipantTotals>,
}

/// Per-participant paid/consumed totals in declaration order.
///
/// Expects input the aggregator already accepted; activities without
/// participants and ids missing from `participants` are skipped.
pub fn summarize(participants: &[Participant], activities: &[Activity]) -> ExpenseSummary {
    let mut totals: IndexMap<&ParticipantId, (Money, Money)> = participants
        .iter()
        .map(|participant| (&participant.id, (Money::ZERO, Money::ZERO)))
        .collect();
    let mut total_expense = Money::ZERO;

    for activity in activities {
        let Some(share) = activity.amount.share_of(activity.participants.len()) else {
            continue;
        };
        total_expense += activity.amount;

        if let Some((paid, _)) = totals.get_mut(&activity.paid_by) {
            *paid += activity.amount;
        }
        for participant in &activity.participants {
            if let Some((_, consumed)) = totals.get_mut(participant) {
                *consumed += share;
            }
        }
    }

    ExpenseSummary {
        total_expense,
        participants: totals
            .into_iter()
            .map(|(id, (paid, consumed))| ParticipantTotals {
                id: id.clone(),
                paid,
                consumed,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{ActivityId, EventId},
        services::{BalanceAggregator, SettlementContext},
    };

    fn activity(amount: i64, paid_by: &str, participants: &[&str]) -> Activity {
        Activity {
            id: ActivityId::from(paid_by),
            event_id: EventId::from("trip"),
            description: String::new(),
            amount: Money::from_i64(amount),
            paid_by: ParticipantId::from(paid_by),
            participants: participants.iter().copied().map(ParticipantId::from).collect(),
        }
    }

    #[test]
    fn totals_match_aggregated_balances() {
        let participants = vec![
            Participant::new("a", "trip", "Asha"),
            Participant::new("b", "trip", "Bikash"),
            Participant::new("c", "trip", "Chandra"),
        ];
        let activities = vec![
            activity(90, "a", &["a", "b", "c"]),
            activity(40, "b", &["b", "c"]),
        ];

        let summary = summarize(&participants, &activities);
        let balances = BalanceAggregator::new(SettlementContext::cents_default())
            .aggregate(&participants, &activities)
            .expect("aggregation should succeed");

        assert_eq!(summary.total_expense, Money::from_i64(130));
        for totals in &summary.participants {
            assert_eq!(balances.get(&totals.id), Some(totals.net()));
        }
        assert_eq!(summary.participants[1].paid, Money::from_i64(40));
        assert_eq!(summary.participants[2].consumed, Money::from_i64(50));
    }

    #[test]
    fn empty_activity_list_has_zero_total() {
        let participants = vec![Participant::new("a", "trip", "Asha")];
        let summary = summarize(&participants, &[]);

        assert!(summary.total_expense.is_zero());
        assert_eq!(summary.participants.len(), 1);
        assert!(summary.participants[0].net().is_zero());
    }
}

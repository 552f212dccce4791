use crate::{
    error::SettlementError,
    model::{Activity, BalanceSheet, Money, Participant, ParticipantId},
    services::settlement_rounding::{
        SettlementContext, UnknownParticipantPolicy, check_conservation,
    },
};
use fxhash::FxHashSet;

/// Reduces activities into one net balance per participant.
pub struct BalanceAggregator {
    policy: UnknownParticipantPolicy,
}

impl BalanceAggregator {
    pub fn new(context: SettlementContext) -> Self {
        Self {
            policy: context.unknown_participants,
        }
    }

    /// Equal-split ledger over `activities`, in the given order.
    ///
    /// The payer is credited the full amount; every listed participant
    /// (payer included, when listed) is debited `amount / participants.len()`.
    /// Balances are keyed in participant declaration order, which the
    /// matcher relies on for its tie-breaks.
    pub fn aggregate(
        &self,
        participants: &[Participant],
        activities: &[Activity],
    ) -> Result<BalanceSheet, SettlementError> {
        let mut seen: FxHashSet<&ParticipantId> = FxHashSet::default();
        for participant in participants {
            if !seen.insert(&participant.id) {
                return Err(SettlementError::DuplicateParticipant {
                    participant: participant.id.clone(),
                });
            }
        }

        tracing::debug!(
            participant_count = participants.len(),
            activity_count = activities.len(),
            unknown_participants = ?self.policy,
            "Balance aggregation started"
        );

        let mut balances = BalanceSheet::with_participants(participants.iter().map(|p| &p.id));
        let mut volume = Money::ZERO;
        let mut debit_count = 0usize;

        for activity in activities {
            let share = self.validate(activity, &balances)?;
            let overflow = || {
                tracing::warn!(
                    activity = %activity.id,
                    amount = %activity.amount,
                    "Rejected activity overflowing the decimal range"
                );
                SettlementError::AmountOverflow {
                    activity: activity.id.clone(),
                }
            };

            volume = volume.checked_add(activity.amount).ok_or_else(overflow)?;
            balances
                .adjust(&activity.paid_by, activity.amount)
                .ok_or_else(overflow)?;
            for participant in &activity.participants {
                balances.adjust(participant, -share).ok_or_else(overflow)?;
            }
            debit_count += activity.participants.len();
        }

        let conservation = check_conservation(&balances, volume, debit_count);
        if let Err(err) = &conservation {
            tracing::error!(
                reject_reason = "conservation_violation",
                member_count = balances.len(),
                volume = %volume,
                error = %err,
                "Aggregated balances do not sum to zero"
            );
        }
        debug_assert!(conservation.is_ok(), "aggregated balances must sum to zero");

        tracing::debug!(
            member_count = balances.len(),
            volume = %volume,
            total = %balances.total(),
            "Balance aggregation finished"
        );

        Ok(balances)
    }

    fn validate(
        &self,
        activity: &Activity,
        balances: &BalanceSheet,
    ) -> Result<Money, SettlementError> {
        if !activity.amount.is_positive() {
            tracing::warn!(
                activity = %activity.id,
                amount = %activity.amount,
                "Rejected activity with non-positive amount"
            );
            return Err(SettlementError::NonPositiveAmount {
                activity: activity.id.clone(),
                amount: activity.amount,
            });
        }

        let Some(share) = activity.amount.share_of(activity.participants.len()) else {
            tracing::warn!(activity = %activity.id, "Rejected activity without participants");
            return Err(SettlementError::EmptyShare {
                activity: activity.id.clone(),
            });
        };

        let mut listed: FxHashSet<&ParticipantId> = FxHashSet::default();
        for participant in &activity.participants {
            if !listed.insert(participant) {
                return Err(SettlementError::DuplicateShareParticipant {
                    activity: activity.id.clone(),
                    participant: participant.clone(),
                });
            }
        }

        if self.policy == UnknownParticipantPolicy::Reject {
            let referenced = std::iter::once(&activity.paid_by).chain(&activity.participants);
            for participant in referenced {
                if !balances.contains(participant) {
                    tracing::warn!(
                        activity = %activity.id,
                        participant = %participant,
                        "Rejected activity referencing unknown participant"
                    );
                    return Err(SettlementError::UnknownParticipant {
                        activity: activity.id.clone(),
                        participant: participant.clone(),
                    });
                }
            }
        }

        Ok(share)
    }
}

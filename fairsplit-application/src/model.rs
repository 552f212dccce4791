use fairsplit_domain::{
    BalanceSheet, EventId, ExpenseSummary, Money, Participant, ParticipantId, Settlement, UserId,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantBalance {
    pub id: ParticipantId,
    pub name: String,
    pub balance: Money,
}

/// Everything the event screen shows, recomputed from storage on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventReport {
    pub event: Event,
    pub balances: Vec<ParticipantBalance>,
    pub settlements: Vec<Settlement>,
    pub summary: ExpenseSummary,
}

impl EventReport {
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }

    pub fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        self.balances
            .iter()
            .find(|entry| &entry.id == id)
            .map_or(id.as_str(), |entry| entry.name.as_str())
    }
}

pub(crate) fn named_balances(
    balances: &BalanceSheet,
    participants: &[Participant],
) -> Vec<ParticipantBalance> {
    balances
        .iter()
        .map(|(id, balance)| ParticipantBalance {
            id: id.clone(),
            name: participants
                .iter()
                .find(|participant| &participant.id == id)
                .map_or_else(|| id.to_string(), |participant| participant.name.clone()),
            balance,
        })
        .collect()
}

use crate::{
    error::ApplicationError,
    model::{EventReport, named_balances},
    ports::EventRepository,
    session::SessionContext,
};
use fairsplit_domain::{EventId, SettlementContext, SettlementEngine, summarize};

/// Builds event reports from whatever the repository currently holds.
///
/// Nothing is cached: every call reloads the event and recomputes balances,
/// so edits and deletions are reflected on the next report.
pub struct SettlementService<'a> {
    repository: &'a dyn EventRepository,
    engine: SettlementEngine,
}

impl<'a> SettlementService<'a> {
    pub fn new(
        repository: &'a dyn EventRepository,
        context: SettlementContext,
    ) -> Result<Self, ApplicationError> {
        Ok(Self {
            repository,
            engine: SettlementEngine::new(context)?,
        })
    }

    pub fn report(
        &self,
        session: &SessionContext,
        event_id: &EventId,
    ) -> Result<EventReport, ApplicationError> {
        let event = self
            .repository
            .find_event(event_id)?
            .ok_or_else(|| ApplicationError::EventNotFound(event_id.clone()))?;

        if !session.can_view(&event) {
            tracing::warn!(
                reject_reason = "access_denied",
                user = %session.user_id,
                event = %event.id,
                "Rejected event report request"
            );
            return Err(ApplicationError::AccessDenied {
                user: session.user_id.clone(),
                event: event.id,
            });
        }

        let participants = self.repository.participants_for_event(event_id)?;
        let activities = self.repository.activities_for_event(event_id)?;

        let balances = self.engine.balances(&participants, &activities)?;
        let settlements = self.engine.match_balances(&balances);
        let summary = summarize(&participants, &activities);

        tracing::info!(
            event = %event.id,
            participant_count = participants.len(),
            activity_count = activities.len(),
            settlement_count = settlements.len(),
            "Event report computed"
        );

        Ok(EventReport {
            balances: named_balances(&balances, &participants),
            event,
            settlements,
            summary,
        })
    }
}

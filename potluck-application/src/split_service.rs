use crate::{
    error::SplitRequestError,
    model::{EventId, EventSplit},
    ports::EventSource,
};
use potluck_domain::{SplitCalculator, SplitContext};

/// Use case behind the `calculate-split` endpoint.
#[derive(Clone, Copy)]
pub struct SplitService<'a> {
    events: &'a dyn EventSource,
    calculator: SplitCalculator,
}

impl<'a> SplitService<'a> {
    pub fn new(events: &'a dyn EventSource) -> Self {
        Self::with_context(events, SplitContext::currency_default())
    }

    pub fn with_context(events: &'a dyn EventSource, context: SplitContext) -> Self {
        Self {
            events,
            calculator: SplitCalculator::with_context(context),
        }
    }

    pub fn calculate_split(&self, event_id: &str) -> Result<EventSplit, SplitRequestError> {
        let event_id = event_id.trim();
        if event_id.is_empty() {
            return Err(SplitRequestError::MissingEventId);
        }
        let event_id = EventId::new(event_id);

        let Some(snapshot) = self.events.load_event(&event_id)? else {
            tracing::info!(event_id = %event_id, "Split requested for unknown event");
            return Err(SplitRequestError::EventNotFound(event_id));
        };

        let split = self
            .calculator
            .calculate(&snapshot.expenses, &snapshot.guests)
            .inspect_err(|err| {
                tracing::warn!(event_id = %event_id, error = %err, "Split calculation failed");
            })?;

        tracing::info!(
            event_id = %event_id,
            participant_count = split.participant_count(),
            debt_count = split.debts.len(),
            total_expenses = %split.total_expenses,
            "Split calculated"
        );

        Ok(EventSplit {
            event: snapshot.summary,
            split,
        })
    }

    /// Splits every event the source knows, in source order.
    pub fn calculate_all(&self) -> Vec<(EventId, Result<EventSplit, SplitRequestError>)> {
        self.events
            .event_ids()
            .into_iter()
            .map(|event_id| {
                let result = self.calculate_split(event_id.as_str());
                (event_id, result)
            })
            .collect()
    }
}

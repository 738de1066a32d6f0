use crate::{
    error::EventSourceError,
    model::{EventId, EventSnapshot},
};
use potluck_domain::{ParticipantId, Split};

/// Resolves an event identifier to its guests and expenses.
pub trait EventSource: Send + Sync {
    fn load_event(&self, event_id: &EventId) -> Result<Option<EventSnapshot>, EventSourceError>;

    fn event_ids(&self) -> Vec<EventId>;
}

pub trait ParticipantDirectory {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for Split {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str> {
        Split::display_name(self, participant)
    }
}

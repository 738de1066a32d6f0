use crate::model::EventId;
use potluck_domain::SplitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event source failure: {message}")]
pub struct EventSourceError {
    pub message: String,
}

impl EventSourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitRequestError {
    #[error("Event ID is required")]
    MissingEventId,
    #[error("Event not found: {0}")]
    EventNotFound(EventId),
    #[error(transparent)]
    EventSource(#[from] EventSourceError),
    #[error(transparent)]
    Split(#[from] SplitError),
}

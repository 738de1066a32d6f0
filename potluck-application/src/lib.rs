#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod split_service;

pub use error::{EventSourceError, SplitRequestError};
pub use model::{EventId, EventSnapshot, EventSplit, EventSummary};
pub use ports::{EventSource, ParticipantDirectory};
pub use split_service::SplitService;

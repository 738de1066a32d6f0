#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod split_presenter;
pub mod text_table;

pub use error_presenter::{ErrorBody, format_split_request_error};
pub use split_presenter::{
    CreditReport, DebtReport, ParticipantReport, SplitPresenter, SplitReport, SplitTables,
};
pub use text_table::{Alignment, TextTableBuilder};

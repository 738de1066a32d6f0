#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::SplitError;
pub use model::{
    BalanceSheet, Debt, Expense, ExpenseId, Guest, Money, Participant, ParticipantId,
    ParticipantSplit, PersonBalance, Split,
};
pub use services::{
    BalanceCalculator, DebtResolver, ParticipantRoster, RoundingMode, SplitCalculator,
    SplitContext,
};

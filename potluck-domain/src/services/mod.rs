pub mod balance_calculator;
pub mod debt_resolver;
pub mod participant_roster;
pub mod rounding;
pub mod split_calculator;

pub use balance_calculator::BalanceCalculator;
pub use debt_resolver::DebtResolver;
pub use participant_roster::ParticipantRoster;
pub use rounding::{MAX_CURRENCY_SCALE, RoundingMode, SplitContext};
pub use split_calculator::SplitCalculator;

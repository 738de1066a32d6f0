use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// No guests were declared and nobody recorded an expense.
    #[error("No participants found")]
    EmptyParticipantSet,
    /// An accumulated amount left the representable decimal range.
    #[error("amount overflow while computing {0}")]
    AmountOverflow(&'static str),
    #[error("currency scale {scale} is not supported (max {max_supported})")]
    UnsupportedScale { scale: u32, max_supported: u32 },
}

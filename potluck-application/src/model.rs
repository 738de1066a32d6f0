use potluck_domain::{Expense, Guest, Split};
use smol_str::SmolStr;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub SmolStr);

impl EventId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventSummary {
    pub id: EventId,
    pub name: SmolStr,
    /// Kept verbatim as the source reported it (usually `YYYY-MM-DD`).
    pub date: SmolStr,
}

/// Everything needed to split one event.
#[derive(Clone, Debug, PartialEq)]
pub struct EventSnapshot {
    pub summary: EventSummary,
    pub guests: Vec<Guest>,
    pub expenses: Vec<Expense>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventSplit {
    pub event: EventSummary,
    pub split: Split,
}

use crate::{
    error::SplitError,
    model::{Expense, Guest, Money, Participant, ParticipantId},
};
use indexmap::IndexMap;

/// Builds the participant set of an event: every declared guest plus every
/// expense recorder who is not a guest.
pub struct ParticipantRoster {
    // Insertion order is participant order in the final split.
    participants: IndexMap<ParticipantId, Participant>,
}

impl ParticipantRoster {
    pub fn new() -> Self {
        Self {
            participants: IndexMap::new(),
        }
    }

    pub fn build(expenses: &[Expense], guests: &[Guest]) -> Result<Vec<Participant>, SplitError> {
        let mut roster = Self::new();
        for guest in guests {
            roster.declare_guest(guest);
        }
        for expense in expenses {
            roster.record_expense(expense)?;
        }
        Ok(roster.into_participants())
    }

    /// A guest declared twice keeps its first position and the latest name.
    pub fn declare_guest(&mut self, guest: &Guest) {
        self.participants.insert(
            guest.id.clone(),
            Participant {
                id: guest.id.clone(),
                name: guest.name.clone(),
                total_spent: Money::ZERO,
            },
        );
    }

    pub fn record_expense(&mut self, expense: &Expense) -> Result<(), SplitError> {
        match self.participants.get_mut(&expense.payer) {
            Some(participant) => {
                participant.total_spent = participant
                    .total_spent
                    .checked_add(expense.amount)
                    .ok_or(SplitError::AmountOverflow("total spent"))?;
            }
            None => {
                self.participants.insert(
                    expense.payer.clone(),
                    Participant {
                        id: expense.payer.clone(),
                        name: expense.payer_name.clone(),
                        total_spent: expense.amount,
                    },
                );
            }
        }
        Ok(())
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants.into_values().collect()
    }
}

impl Default for ParticipantRoster {
    fn default() -> Self {
        Self::new()
    }
}

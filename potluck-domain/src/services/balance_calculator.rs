use crate::{
    error::SplitError,
    model::{BalanceSheet, Money, Participant, PersonBalance},
    services::SplitContext,
};
use rust_decimal::Decimal;

/// Computes the fair share and each participant's net balance.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// `fair_share = round(total / count)` and `balance = round(total_spent - fair_share)`.
    ///
    /// `total_expenses` in the returned sheet is left unrounded so callers can
    /// decide how to present it.
    pub fn calculate(
        &self,
        participants: &[Participant],
        context: SplitContext,
    ) -> Result<BalanceSheet, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::EmptyParticipantSet);
        }

        let total_expenses = Money::checked_sum(participants.iter().map(|p| p.total_spent))
            .ok_or(SplitError::AmountOverflow("total expenses"))?;
        let count = Decimal::from(participants.len());
        let fair_share =
            context.round(Money::from_decimal(total_expenses.as_decimal() / count));

        let balances = participants
            .iter()
            .map(|participant| {
                let balance = participant
                    .total_spent
                    .checked_sub(fair_share)
                    .ok_or(SplitError::AmountOverflow("balance"))?;
                Ok(PersonBalance {
                    id: participant.id.clone(),
                    balance: context.round(balance),
                })
            })
            .collect::<Result<Vec<_>, SplitError>>()?;

        tracing::debug!(
            participant_count = participants.len(),
            total_expenses = %total_expenses,
            fair_share = %fair_share,
            "Balances calculated"
        );

        Ok(BalanceSheet {
            total_expenses,
            fair_share,
            balances,
        })
    }
}

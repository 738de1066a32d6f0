use crate::{
    model::{Debt, Money, ParticipantId, PersonBalance},
    services::SplitContext,
};

/// Greedy debt resolution.
///
/// The largest remaining creditor is matched against the largest remaining
/// debtor until one side runs out. This does not always produce the minimum
/// number of debts, but each participant's debts add up to the magnitude of
/// their balance, up to the rounding residual left by the fair share.
pub struct DebtResolver;

struct Position<'a> {
    id: &'a ParticipantId,
    remaining: Money,
}

impl DebtResolver {
    pub fn resolve(&self, balances: &[PersonBalance], context: SplitContext) -> Vec<Debt> {
        let tolerance = context.settle_tolerance();

        let mut creditors: Vec<Position<'_>> = balances
            .iter()
            .filter(|b| b.balance.is_positive())
            .map(|b| Position {
                id: &b.id,
                remaining: b.balance,
            })
            .collect();
        let mut debtors: Vec<Position<'_>> = balances
            .iter()
            .filter(|b| b.balance.is_negative())
            .map(|b| Position {
                id: &b.id,
                remaining: b.balance,
            })
            .collect();

        // Stable sorts: ties keep participant order.
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining));

        let mut debts = Vec::with_capacity(creditors.len() + debtors.len());
        let mut creditor_idx = 0;
        let mut debtor_idx = 0;

        while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
            let creditor = &mut creditors[creditor_idx];
            let debtor = &mut debtors[debtor_idx];

            let transfer = creditor.remaining.min(debtor.remaining.abs());
            debts.push(Debt {
                from: debtor.id.clone(),
                to: creditor.id.clone(),
                amount: context.round(transfer),
            });

            // transfer <= both magnitudes, so neither side can overflow.
            creditor.remaining -= transfer;
            debtor.remaining += transfer;

            if creditor.remaining.abs() < tolerance {
                creditor_idx += 1;
            }
            if debtor.remaining.abs() < tolerance {
                debtor_idx += 1;
            }
        }

        let unsettled = Money::checked_sum(
            creditors[creditor_idx..]
                .iter()
                .map(|c| c.remaining)
                .chain(debtors[debtor_idx..].iter().map(|d| d.remaining)),
        );
        if let Some(unsettled) = unsettled.filter(|amount| !amount.is_zero()) {
            tracing::debug!(
                unsettled = %unsettled,
                debt_count = debts.len(),
                "Rounding residual left after debt resolution"
            );
        }

        debts
    }
}

use crate::{
    error::SplitError,
    model::{Debt, Expense, Guest, Money, ParticipantId, ParticipantSplit, Split},
    services::{BalanceCalculator, DebtResolver, ParticipantRoster, SplitContext},
};
use fxhash::FxHashMap;
use rust_decimal::Decimal;

/// Settlement calculation service
///
/// Pure function of its inputs: holds no state between calls and may be
/// used concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitCalculator {
    context: SplitContext,
}

impl SplitCalculator {
    pub fn new() -> Self {
        Self::with_context(SplitContext::currency_default())
    }

    pub fn with_context(context: SplitContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> SplitContext {
        self.context
    }

    /// Calculate the split of an event
    ///
    /// # Arguments
    /// * `expenses` - Recorded expenses, in recording order
    /// * `guests` - Declared guests, in declaration order
    ///
    /// # Returns
    /// One entry per participant (guests first, then recorders who are not
    /// guests) with their debts, or `EmptyParticipantSet` when there is
    /// nobody to split between.
    pub fn calculate(&self, expenses: &[Expense], guests: &[Guest]) -> Result<Split, SplitError> {
        let context = self.context;
        let participants = ParticipantRoster::build(expenses, guests)?;
        let sheet = BalanceCalculator.calculate(&participants, context)?;
        let debts = DebtResolver.resolve(&sheet.balances, context);

        let index: FxHashMap<&ParticipantId, usize> = participants
            .iter()
            .enumerate()
            .map(|(idx, participant)| (&participant.id, idx))
            .collect();
        let mut owes: Vec<Vec<Debt>> = vec![Vec::new(); participants.len()];
        let mut owed: Vec<Vec<Debt>> = vec![Vec::new(); participants.len()];
        for debt in &debts {
            if let Some(&idx) = index.get(&debt.from) {
                owes[idx].push(debt.clone());
            }
            if let Some(&idx) = index.get(&debt.to) {
                owed[idx].push(debt.clone());
            }
        }

        let splits: Vec<ParticipantSplit> = participants
            .into_iter()
            .zip(sheet.balances)
            .zip(owes.into_iter().zip(owed))
            .map(|((participant, balance), (owes, owed))| ParticipantSplit {
                id: participant.id,
                name: participant.name,
                total_spent: context.round(participant.total_spent),
                share: sheet.fair_share,
                balance: balance.balance,
                owes,
                owed,
            })
            .collect();

        let residual = Money::checked_sum(splits.iter().map(|s| s.balance))
            .ok_or(SplitError::AmountOverflow("balance residual"))?;
        let tolerance = context.settle_tolerance().as_decimal() * Decimal::from(splits.len());
        if residual.abs().as_decimal() > tolerance {
            tracing::warn!(
                residual = %residual,
                participant_count = splits.len(),
                "Split balances do not sum to zero within rounding tolerance"
            );
        }

        Ok(Split {
            total_expenses: context.round(sheet.total_expenses),
            share_per_person: sheet.fair_share,
            participants: splits,
            debts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> SplitCalculator {
        SplitCalculator::new()
    }

    fn guest(id: &str, name: &str) -> Guest {
        Guest {
            id: ParticipantId::new(id),
            name: name.into(),
        }
    }

    fn expense(id: &str, amount: Money, payer: &str, payer_name: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            amount,
            payer: ParticipantId::new(payer),
            payer_name: payer_name.into(),
        }
    }

    fn amounts(debts: &[Debt]) -> Vec<(&str, &str, Money)> {
        debts
            .iter()
            .map(|d| (d.from.as_str(), d.to.as_str(), d.amount))
            .collect()
    }

    #[fixture]
    fn four_guests() -> Vec<Guest> {
        vec![
            guest("user-1", "Alice Johnson"),
            guest("user-2", "Bob Smith"),
            guest("user-3", "Charlie Brown"),
            guest("user-4", "David Wilson"),
        ]
    }

    #[rstest]
    fn no_participants_fail(calculator: SplitCalculator) {
        assert_eq!(
            calculator.calculate(&[], &[]),
            Err(SplitError::EmptyParticipantSet)
        );
    }

    #[rstest]
    fn no_expenses_means_nobody_owes(calculator: SplitCalculator, four_guests: Vec<Guest>) {
        let split = calculator
            .calculate(&[], &four_guests)
            .expect("guests are participants");

        assert_eq!(split.total_expenses, Money::ZERO);
        assert_eq!(split.share_per_person, Money::ZERO);
        assert_eq!(split.participant_count(), 4);
        for participant in &split.participants {
            assert_eq!(participant.total_spent, Money::ZERO);
            assert_eq!(participant.share, Money::ZERO);
            assert_eq!(participant.balance, Money::ZERO);
            assert!(participant.owes.is_empty());
            assert!(participant.owed.is_empty());
        }
        assert!(split.debts.is_empty());
    }

    #[rstest]
    fn single_participant_pays_own_share(calculator: SplitCalculator) {
        let split = calculator
            .calculate(
                &[expense("expense-1", Money::from_i64(100), "user-1", "Solo User")],
                &[guest("user-1", "Solo User")],
            )
            .expect("single participant");

        assert_eq!(split.participant_count(), 1);
        assert_eq!(split.participants[0].balance, Money::ZERO);
        assert!(split.debts.is_empty());
    }

    #[rstest]
    fn one_expense_is_split_evenly(calculator: SplitCalculator) {
        let split = calculator
            .calculate(
                &[expense("expense-1", Money::new(50000, 2), "user-1", "Den Grassforest")],
                &[
                    guest("user-1", "Den Grassforest"),
                    guest("user-2", "Volmund Highchanter de Felhas"),
                ],
            )
            .expect("two participants");

        assert_eq!(split.total_expenses, Money::from_i64(500));
        assert_eq!(split.share_per_person, Money::from_i64(250));

        let first = &split.participants[0];
        assert_eq!(first.total_spent, Money::from_i64(500));
        assert_eq!(first.share, Money::from_i64(250));
        assert_eq!(first.balance, Money::from_i64(250));

        let second = &split.participants[1];
        assert_eq!(second.total_spent, Money::ZERO);
        assert_eq!(second.share, Money::from_i64(250));
        assert_eq!(second.balance, Money::from_i64(-250));
        assert_eq!(
            amounts(&second.owes),
            vec![("user-2", "user-1", Money::from_i64(250))]
        );
        assert_eq!(first.owed, second.owes);
    }

    #[rstest]
    fn multiple_expenses_round_share_half_up(calculator: SplitCalculator) {
        let split = calculator
            .calculate(
                &[
                    expense("expense-1", Money::from_i64(500), "user-1", "Den Grassforest"),
                    expense("expense-2", Money::from_i64(200), "user-1", "Den Grassforest"),
                    expense(
                        "expense-3",
                        Money::from_i64(300),
                        "user-2",
                        "Volmund Highchanter de Felhas",
                    ),
                ],
                &[
                    guest("user-1", "Den Grassforest"),
                    guest("user-2", "Volmund Highchanter de Felhas"),
                    guest("user-3", "Alarak Greycastle"),
                ],
            )
            .expect("three participants");

        assert_eq!(split.total_expenses, Money::from_i64(1000));
        assert_eq!(split.share_per_person, Money::new(33333, 2));

        let den = &split.participants[0];
        assert_eq!(den.total_spent, Money::from_i64(700));
        assert_eq!(den.balance, Money::new(36667, 2));
        assert_eq!(
            amounts(&den.owed),
            vec![
                ("user-3", "user-1", Money::new(33333, 2)),
                ("user-2", "user-1", Money::new(3333, 2)),
            ]
        );
        assert!(den.owes.is_empty());

        let volmund = &split.participants[1];
        assert_eq!(volmund.total_spent, Money::from_i64(300));
        assert_eq!(volmund.balance, Money::new(-3333, 2));
        assert_eq!(
            amounts(&volmund.owes),
            vec![("user-2", "user-1", Money::new(3333, 2))]
        );

        let alarak = &split.participants[2];
        assert_eq!(alarak.total_spent, Money::ZERO);
        assert_eq!(alarak.balance, Money::new(-33333, 2));
        assert_eq!(
            amounts(&alarak.owes),
            vec![("user-3", "user-1", Money::new(33333, 2))]
        );
    }

    #[rstest]
    fn four_guests_with_three_payers(calculator: SplitCalculator, four_guests: Vec<Guest>) {
        let split = calculator
            .calculate(
                &[
                    expense("expense-1", Money::from_i64(120), "user-1", "Alice Johnson"),
                    expense("expense-2", Money::from_i64(80), "user-2", "Bob Smith"),
                    expense("expense-3", Money::from_i64(40), "user-3", "Charlie Brown"),
                ],
                &four_guests,
            )
            .expect("four participants");

        assert_eq!(split.total_expenses, Money::from_i64(240));
        assert_eq!(split.share_per_person, Money::from_i64(60));

        let balances: Vec<Money> = split.participants.iter().map(|p| p.balance).collect();
        assert_eq!(
            balances,
            vec![
                Money::from_i64(60),
                Money::from_i64(20),
                Money::from_i64(-20),
                Money::from_i64(-60),
            ]
        );
        assert_eq!(
            amounts(&split.debts),
            vec![
                ("user-4", "user-1", Money::from_i64(60)),
                ("user-3", "user-2", Money::from_i64(20)),
            ]
        );
        assert_eq!(split.display_name(&ParticipantId::new("user-4")), Some("David Wilson"));
    }

    #[rstest]
    fn recorder_outside_guest_list_joins_split(calculator: SplitCalculator) {
        let split = calculator
            .calculate(
                &[expense("expense-1", Money::from_i64(90), "user-9", "Walk-in")],
                &[guest("user-1", "Alice"), guest("user-2", "Bob")],
            )
            .expect("recorder is a participant");

        assert_eq!(split.participant_count(), 3);
        assert_eq!(split.share_per_person, Money::from_i64(30));
        let walk_in = split
            .participant(&ParticipantId::new("user-9"))
            .expect("walk-in participant");
        assert_eq!(walk_in.balance, Money::from_i64(60));
        assert_eq!(walk_in.owed.len(), 2);
    }

    #[rstest]
    fn huge_expenses_report_overflow(calculator: SplitCalculator, four_guests: Vec<Guest>) {
        let huge = Money::from_decimal(Decimal::from_i128_with_scale(
            70_000_000_000_000_000_000_000_000_000,
            0,
        ));

        let result = calculator.calculate(
            &[
                expense("expense-1", huge, "user-1", "Alice Johnson"),
                expense("expense-2", huge, "user-2", "Bob Smith"),
            ],
            &four_guests,
        );

        assert_eq!(result, Err(SplitError::AmountOverflow("total expenses")));
    }

    #[rstest]
    fn zero_scale_context_rounds_to_whole_units() {
        let calculator =
            SplitCalculator::with_context(SplitContext::with_scale(0).expect("scale 0"));
        let split = calculator
            .calculate(
                &[expense("expense-1", Money::from_i64(1000), "a", "A")],
                &[guest("a", "A"), guest("b", "B"), guest("c", "C")],
            )
            .expect("three participants");

        assert_eq!(split.share_per_person, Money::from_i64(333));
        assert_eq!(split.participants[0].balance, Money::from_i64(667));
    }
}

use potluck_domain::{
    Expense, ExpenseId, Guest, Money, ParticipantId, Split, SplitCalculator, SplitContext,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn build_inputs(
    guest_count: usize,
    amounts: &[i64],
    payer_indexes: &[usize],
) -> (Vec<Expense>, Vec<Guest>) {
    let guests: Vec<Guest> = NAMES[..guest_count]
        .iter()
        .map(|&name| Guest {
            id: ParticipantId::new(name),
            name: name.into(),
        })
        .collect();

    let expenses: Vec<Expense> = amounts
        .iter()
        .enumerate()
        .map(|(idx, &cents)| {
            let payer = NAMES[payer_indexes.get(idx).copied().unwrap_or(0) % NAMES.len()];
            Expense {
                id: ExpenseId::new(format!("expense-{idx}")),
                amount: Money::new(cents, 2),
                payer: ParticipantId::new(payer),
                payer_name: payer.into(),
            }
        })
        .collect();

    (expenses, guests)
}

fn tolerance(split: &Split) -> Decimal {
    SplitContext::currency_default().settle_tolerance().as_decimal()
        * Decimal::from(split.participant_count())
}

proptest! {
    #[test]
    fn balances_sum_to_zero_within_tolerance(
        guest_count in 0usize..=6,
        amounts in prop::collection::vec(0i64..=100_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
    ) {
        let (expenses, guests) = build_inputs(guest_count, &amounts, &payer_indexes);
        let Ok(split) = SplitCalculator::new().calculate(&expenses, &guests) else {
            prop_assert!(expenses.is_empty() && guests.is_empty());
            return Ok(());
        };

        let total: Money = split.participants.iter().map(|p| p.balance).sum();
        prop_assert!(total.abs().as_decimal() <= tolerance(&split));
    }

    #[test]
    fn debts_conserve_each_balance(
        guest_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=100_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
    ) {
        let (expenses, guests) = build_inputs(guest_count, &amounts, &payer_indexes);
        let split = SplitCalculator::new()
            .calculate(&expenses, &guests)
            .expect("at least one guest");

        for participant in &split.participants {
            let owes: Money = participant.owes.iter().map(|d| d.amount).sum();
            let owed: Money = participant.owed.iter().map(|d| d.amount).sum();

            if participant.balance.is_negative() {
                prop_assert!(participant.owed.is_empty());
                let gap = (owes - participant.balance.abs()).abs();
                prop_assert!(gap.as_decimal() <= tolerance(&split));
            } else if participant.balance.is_positive() {
                prop_assert!(participant.owes.is_empty());
                let gap = (owed - participant.balance).abs();
                prop_assert!(gap.as_decimal() <= tolerance(&split));
            } else {
                prop_assert!(participant.owes.is_empty() && participant.owed.is_empty());
            }
        }
    }

    #[test]
    fn every_participant_appears_once(
        guest_count in 0usize..=6,
        amounts in prop::collection::vec(0i64..=100_000, 1..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 1..=20),
    ) {
        let (expenses, guests) = build_inputs(guest_count, &amounts, &payer_indexes);
        let split = SplitCalculator::new()
            .calculate(&expenses, &guests)
            .expect("at least one expense recorder");

        let mut ids: Vec<&str> = split.participants.iter().map(|p| p.id.as_str()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);

        for guest in &guests {
            prop_assert!(split.participant(&guest.id).is_some());
        }
        for expense in &expenses {
            prop_assert!(split.participant(&expense.payer).is_some());
        }
    }

    #[test]
    fn debts_are_positive_and_between_distinct_participants(
        guest_count in 1usize..=6,
        amounts in prop::collection::vec(0i64..=100_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
    ) {
        let (expenses, guests) = build_inputs(guest_count, &amounts, &payer_indexes);
        let split = SplitCalculator::new()
            .calculate(&expenses, &guests)
            .expect("at least one guest");

        for debt in &split.debts {
            prop_assert!(debt.amount.is_positive());
            prop_assert_ne!(&debt.from, &debt.to);
        }
    }
}

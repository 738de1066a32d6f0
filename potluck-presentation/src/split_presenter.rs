use crate::text_table::{Alignment, TextTableBuilder};
use potluck_application::{EventSplit, ParticipantDirectory};
use potluck_domain::{Debt, Money, ParticipantId, SplitContext};
use potluck_i18n as i18n;
use rust_decimal::Decimal;
use serde::Serialize;
use smol_str::SmolStr;
use std::borrow::Cow;

/// Response document of the `calculate-split` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub event_name: SmolStr,
    pub event_date: SmolStr,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    pub participant_count: usize,
    pub results: Vec<ParticipantReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantReport {
    pub user_name: SmolStr,
    pub user_id: SmolStr,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub share_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owes: Option<Vec<DebtReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owed: Option<Vec<CreditReport>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtReport {
    pub to_user: SmolStr,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditReport {
    pub from_user: SmolStr,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

pub struct SplitTables {
    pub heading: String,
    pub balance_table: String,
    /// `None` when nobody owes anything.
    pub debt_table: Option<String>,
}

pub struct SplitPresenter;

impl SplitPresenter {
    pub fn render(result: &EventSplit) -> SplitReport {
        let split = &result.split;
        let results = split
            .participants
            .iter()
            .map(|participant| ParticipantReport {
                user_name: participant.name.clone(),
                user_id: participant.id.0.clone(),
                total_spent: participant.total_spent.as_decimal(),
                share_amount: participant.share.as_decimal(),
                balance: participant.balance.as_decimal(),
                owes: non_empty(&participant.owes, |debt| DebtReport {
                    to_user: participant_label(&debt.to, split),
                    amount: debt.amount.as_decimal(),
                }),
                owed: non_empty(&participant.owed, |debt| CreditReport {
                    from_user: participant_label(&debt.from, split),
                    amount: debt.amount.as_decimal(),
                }),
            })
            .collect();

        SplitReport {
            event_name: result.event.name.clone(),
            event_date: result.event.date.clone(),
            total_expenses: split.total_expenses.as_decimal(),
            participant_count: split.participant_count(),
            results,
        }
    }

    pub fn render_tables(result: &EventSplit, context: SplitContext) -> SplitTables {
        let split = &result.split;
        let heading = format!(
            "{}\n{}: {}",
            i18n::event_heading(&result.event.name, &result.event.date, split.participant_count()),
            i18n::TOTAL_EXPENSES,
            format_amount(split.total_expenses, context),
        );

        let balance_table = Self::build_balance_table(result, context);
        let debt_table = if split.debts.is_empty() {
            None
        } else {
            Some(Self::build_debt_table(&split.debts, split, context))
        };

        SplitTables {
            heading,
            balance_table,
            debt_table,
        }
    }

    pub fn build_balance_table(result: &EventSplit, context: SplitContext) -> String {
        let headers = [
            Cow::Borrowed(i18n::PARTICIPANT),
            Cow::Borrowed(i18n::TOTAL_SPENT),
            Cow::Borrowed(i18n::SHARE),
            Cow::Borrowed(i18n::BALANCE),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&headers);

        for participant in &result.split.participants {
            let sign = if participant.balance.is_negative() {
                ""
            } else {
                "+"
            };
            builder = builder.row([
                Cow::Borrowed(participant.name.as_str()),
                Cow::Owned(format_amount(participant.total_spent, context)),
                Cow::Owned(format_amount(participant.share, context)),
                Cow::Owned(format!("{sign}{}", format_amount(participant.balance, context))),
            ]);
        }

        builder.build()
    }

    pub fn build_debt_table(
        debts: &[Debt],
        directory: &dyn ParticipantDirectory,
        context: SplitContext,
    ) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for debt in debts {
            builder = builder.row([
                Cow::Owned(participant_label(&debt.from, directory).to_string()),
                Cow::Owned(participant_label(&debt.to, directory).to_string()),
                Cow::Owned(format_amount(debt.amount, context)),
            ]);
        }

        builder.build()
    }
}

fn non_empty<T>(debts: &[Debt], map: impl FnMut(&Debt) -> T) -> Option<Vec<T>> {
    if debts.is_empty() {
        None
    } else {
        Some(debts.iter().map(map).collect())
    }
}

fn participant_label(id: &ParticipantId, directory: &dyn ParticipantDirectory) -> SmolStr {
    match directory.display_name(id) {
        Some(name) => SmolStr::new(name),
        None => id.0.clone(),
    }
}

fn format_amount(amount: Money, context: SplitContext) -> String {
    format!(
        "{:.prec$}",
        amount.as_decimal(),
        prec = context.scale as usize
    )
}

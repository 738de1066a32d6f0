use crate::services::RoundingMode;
use rust_decimal::Decimal;
use smol_str::SmolStr;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub SmolStr);

impl ParticipantId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpenseId(pub SmolStr);

impl ExpenseId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decimal currency amount. Binary floating point never enters the calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(12345, 2)` is 123.45.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn round_to(self, scale: u32, mode: RoundingMode) -> Self {
        Self(self.0.round_dp_with_strategy(scale, mode.strategy()))
    }

    /// `None` when the result does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn checked_sum(amounts: impl IntoIterator<Item = Self>) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A recorded expense. The payer is whoever recorded it.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub payer: ParticipantId,
    pub payer_name: SmolStr,
}

/// A declared guest of an event.
#[derive(Clone, Debug, PartialEq)]
pub struct Guest {
    pub id: ParticipantId,
    pub name: SmolStr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: SmolStr,
    pub total_spent: Money,
}

/// Positive balance: overpaid, is owed money. Negative: owes money.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonBalance {
    pub id: ParticipantId,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BalanceSheet {
    pub total_expenses: Money,
    pub fair_share: Money,
    pub balances: Vec<PersonBalance>,
}

/// `from` owes `to` the amount.
#[derive(Clone, Debug, PartialEq)]
pub struct Debt {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantSplit {
    pub id: ParticipantId,
    pub name: SmolStr,
    pub total_spent: Money,
    pub share: Money,
    pub balance: Money,
    pub owes: Vec<Debt>,
    pub owed: Vec<Debt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub total_expenses: Money,
    pub share_per_person: Money,
    pub participants: Vec<ParticipantSplit>,
    pub debts: Vec<Debt>,
}

impl Split {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&ParticipantSplit> {
        self.participants.iter().find(|participant| &participant.id == id)
    }

    pub fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.participant(id).map(|participant| participant.name.as_str())
    }
}

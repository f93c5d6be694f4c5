//! Debt domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHLY_RATE_DIVISOR;
use crate::errors::{Error, Result};

/// Classification of a debt obligation. Display only, it never changes the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtAccountType {
    CreditCard,
    Loan,
    LineOfCredit,
    #[default]
    Other,
}

/// A single debt obligation supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtAccount {
    pub id: String,
    pub name: String,
    /// Amount currently owed. Zero means already paid off.
    pub balance: Decimal,
    /// Contractually required monthly payment
    pub minimum_payment: Decimal,
    /// Annual percentage rate, e.g. `18.99` for 18.99%/year
    pub interest_rate: Decimal,
    #[serde(default)]
    pub account_type: DebtAccountType,
}

impl DebtAccount {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: Decimal,
        minimum_payment: Decimal,
        interest_rate: Decimal,
        account_type: DebtAccountType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            minimum_payment,
            interest_rate,
            account_type,
        }
    }

    /// Monthly periodic rate (`interest_rate / 100 / 12`).
    pub fn monthly_rate(&self) -> Decimal {
        self.interest_rate / MONTHLY_RATE_DIVISOR
    }

    /// Interest accrued over one month on the current balance.
    pub fn monthly_interest(&self) -> Decimal {
        self.balance * self.monthly_rate()
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= Decimal::ZERO
    }

    /// Whether the minimum payment exceeds this month's interest accrual.
    /// When it does not, the balance can never reach zero on minimums alone.
    pub fn covers_interest(&self) -> bool {
        self.is_paid_off() || self.minimum_payment > self.monthly_interest()
    }
}

/// Sum of all outstanding balances.
pub fn total_balance(debts: &[DebtAccount]) -> Result<Decimal> {
    checked_sum(debts.iter().map(|d| d.balance.max(Decimal::ZERO)), "balance")
}

/// Sum of minimum payments across debts that still carry a balance.
pub fn total_minimum_payment(debts: &[DebtAccount]) -> Result<Decimal> {
    checked_sum(
        debts
            .iter()
            .filter(|d| !d.is_paid_off())
            .map(|d| d.minimum_payment),
        "minimum payment",
    )
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>, what: &str) -> Result<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| Error::Calculation(format!("Total {} overflows", what)))
    })
}

//! Payoff domain models.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{AVALANCHE_STRATEGY_NAME, CUSTOM_STRATEGY_NAME, SNOWBALL_STRATEGY_NAME};
use crate::debts::{total_minimum_payment, DebtAccount};
use crate::errors::{Error, Result};

/// Which prioritization rule produced a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    Snowball,
    Avalanche,
    Custom,
}

impl StrategyKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::Snowball => SNOWBALL_STRATEGY_NAME,
            StrategyKind::Avalanche => AVALANCHE_STRATEGY_NAME,
            StrategyKind::Custom => CUSTOM_STRATEGY_NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Snowball => "Pay off smallest balances first for quick wins",
            StrategyKind::Avalanche => {
                "Pay off highest interest rates first to minimize total interest"
            }
            StrategyKind::Custom => "Pay off debts in your own priority order",
        }
    }
}

/// Priority rule deciding which debt receives the extra payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayoffOrdering {
    /// Ascending balance
    Snowball,
    /// Descending interest rate
    Avalanche,
    /// Caller-supplied debt ids, highest priority first. Debts not listed
    /// keep their input order after the listed ones.
    Custom(Vec<String>),
}

impl PayoffOrdering {
    pub fn kind(&self) -> StrategyKind {
        match self {
            PayoffOrdering::Snowball => StrategyKind::Snowball,
            PayoffOrdering::Avalanche => StrategyKind::Avalanche,
            PayoffOrdering::Custom(_) => StrategyKind::Custom,
        }
    }

    /// Compares two debts by priority. `Less` means `a` is paid first.
    /// Equal debts keep input order because callers sort stably.
    pub fn priority_cmp(&self, a: &DebtAccount, b: &DebtAccount) -> Ordering {
        match self {
            PayoffOrdering::Snowball => a.balance.cmp(&b.balance),
            PayoffOrdering::Avalanche => b.interest_rate.cmp(&a.interest_rate),
            PayoffOrdering::Custom(order) => {
                let rank = |debt: &DebtAccount| {
                    order
                        .iter()
                        .position(|id| *id == debt.id)
                        .unwrap_or(usize::MAX)
                };
                rank(a).cmp(&rank(b))
            }
        }
    }
}

/// How the priority debt is chosen as balances shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PriorityMode {
    /// Order is computed once before the first month and never revisited.
    #[default]
    Fixed,
    /// The ordering is re-applied to current balances every month.
    Rerank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOptions {
    pub priority_mode: PriorityMode,
}

/// One (month, debt) payment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScheduleEntry {
    /// 1-based month index within the simulation
    pub month: u32,
    pub date: NaiveDate,
    pub debt_id: String,
    pub debt_name: String,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Balance after this month's payments, floored at zero
    pub remaining_balance: Decimal,
}

/// Result of one full simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffStrategy {
    pub name: String,
    pub description: String,
    pub kind: StrategyKind,
    pub total_interest: Decimal,
    pub total_payments: Decimal,
    pub months_to_payoff: u32,
    pub payoff_date: NaiveDate,
    /// Sum of all balances before the first payment
    pub starting_balance: Decimal,
    /// Sum of all balances when the simulation stopped
    pub ending_balance: Decimal,
    /// Set when the month cap was reached with money still owed.
    /// The payoff date is then not achievable as configured.
    pub did_not_converge: bool,
    pub schedule: Vec<PaymentScheduleEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendedStrategy {
    Snowball,
    Avalanche,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSavings {
    /// Months saved by avalanche over snowball (may be negative)
    pub time_saved: i64,
    /// Interest saved by avalanche over snowball (may be negative)
    pub interest_saved: Decimal,
    pub recommended_strategy: RecommendedStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffComparison {
    pub snowball: PayoffStrategy,
    pub avalanche: PayoffStrategy,
    pub savings: PayoffSavings,
}

/// Percent-paid-off checkpoint derived from a completed schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMilestone {
    /// 25, 50, 75 or 100
    pub percent: u32,
    pub title: String,
    pub description: String,
    pub month: u32,
    pub target_date: NaiveDate,
    pub amount_paid: Decimal,
    pub remaining_debt: Decimal,
}

/// Summary fields a plan record stores for a chosen strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtPlanSummary {
    pub strategy_name: String,
    pub kind: StrategyKind,
    pub total_debt: Decimal,
    /// Minimum payments plus the extra payment
    pub monthly_payment: Decimal,
    pub extra_payment: Decimal,
    pub estimated_months: u32,
    pub total_interest: Decimal,
    pub payoff_date: NaiveDate,
    pub did_not_converge: bool,
}

impl DebtPlanSummary {
    pub fn from_strategy(
        strategy: &PayoffStrategy,
        debts: &[DebtAccount],
        extra_payment: Decimal,
    ) -> Result<Self> {
        let monthly_payment = total_minimum_payment(debts)?
            .checked_add(extra_payment)
            .ok_or_else(|| Error::Calculation("Monthly payment overflows".to_string()))?;
        Ok(Self {
            strategy_name: strategy.name.clone(),
            kind: strategy.kind,
            total_debt: strategy.starting_balance,
            monthly_payment,
            extra_payment,
            estimated_months: strategy.months_to_payoff,
            total_interest: strategy.total_interest,
            payoff_date: strategy.payoff_date,
            did_not_converge: strategy.did_not_converge,
        })
    }
}

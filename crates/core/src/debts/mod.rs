//! Debts module - input records for the payoff engine and their boundary validation.

mod debts_model;
mod debts_validation;

pub use debts_model::{total_balance, total_minimum_payment, DebtAccount, DebtAccountType};
pub use debts_validation::{validate_debts, validate_extra_payment};

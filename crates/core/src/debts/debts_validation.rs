//! Boundary validation for payoff engine inputs.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::debts_model::DebtAccount;
use crate::errors::{Error, Result, ValidationError};

/// Validates a set of debts before simulation.
///
/// An empty slice is accepted; the simulator turns it into a zero-month strategy.
pub fn validate_debts(debts: &[DebtAccount]) -> Result<()> {
    let mut seen_ids = HashSet::with_capacity(debts.len());

    for debt in debts {
        if debt.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if !seen_ids.insert(debt.id.as_str()) {
            return Err(Error::invalid_input(format!(
                "Duplicate debt id '{}'",
                debt.id
            )));
        }
        if debt.balance < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Debt '{}' has a negative balance ({})",
                debt.id, debt.balance
            )));
        }
        if debt.minimum_payment <= Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Debt '{}' must have a positive minimum payment (got {})",
                debt.id, debt.minimum_payment
            )));
        }
        if debt.interest_rate < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Debt '{}' has a negative interest rate ({})",
                debt.id, debt.interest_rate
            )));
        }
    }

    Ok(())
}

pub fn validate_extra_payment(extra_payment: Decimal) -> Result<()> {
    if extra_payment < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "Extra payment must not be negative (got {})",
            extra_payment
        )));
    }
    Ok(())
}

use debtpilot_core::debts::DebtAccount;
use debtpilot_core::payoff::{PayoffOrdering, PriorityMode, StrategyKind};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;

/// Body for single-strategy endpoints.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRequest {
    pub debts: Vec<DebtAccount>,
    #[serde(default)]
    pub extra_payment: Decimal,
    pub strategy: StrategyKind,
    /// Debt ids, highest priority first. Required when `strategy` is `custom`.
    #[serde(default)]
    pub custom_order: Option<Vec<String>>,
    #[serde(default)]
    pub priority_mode: Option<PriorityMode>,
}

impl PayoffRequest {
    pub fn ordering(&self) -> Result<PayoffOrdering, ApiError> {
        match self.strategy {
            StrategyKind::Snowball => Ok(PayoffOrdering::Snowball),
            StrategyKind::Avalanche => Ok(PayoffOrdering::Avalanche),
            StrategyKind::Custom => self
                .custom_order
                .clone()
                .map(PayoffOrdering::Custom)
                .ok_or_else(|| {
                    ApiError::BadRequest("customOrder is required for the custom strategy".into())
                }),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub debts: Vec<DebtAccount>,
    #[serde(default)]
    pub extra_payment: Decimal,
}

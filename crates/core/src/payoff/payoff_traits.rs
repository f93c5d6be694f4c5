use rust_decimal::Decimal;

use crate::debts::DebtAccount;
use crate::errors::Result;
use crate::payoff::payoff_model::{
    DebtPlanSummary, PayoffComparison, PayoffMilestone, PayoffOrdering, PayoffStrategy,
    PriorityMode,
};

/// Trait for payoff service operations
pub trait PayoffServiceTrait: Send + Sync {
    /// Simulates one strategy. `priority_mode` overrides the service default.
    fn simulate(
        &self,
        debts: &[DebtAccount],
        extra_payment: Decimal,
        ordering: &PayoffOrdering,
        priority_mode: Option<PriorityMode>,
    ) -> Result<PayoffStrategy>;

    fn compare(&self, debts: &[DebtAccount], extra_payment: Decimal) -> Result<PayoffComparison>;

    fn milestones(&self, strategy: &PayoffStrategy) -> Vec<PayoffMilestone>;

    fn plan_summary(
        &self,
        debts: &[DebtAccount],
        extra_payment: Decimal,
        ordering: &PayoffOrdering,
        priority_mode: Option<PriorityMode>,
    ) -> Result<DebtPlanSummary>;
}

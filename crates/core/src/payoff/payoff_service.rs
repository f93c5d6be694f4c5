use std::sync::Arc;

use log::{info, warn};
use rust_decimal::Decimal;

use super::payoff_comparator::compare_with_options;
use super::payoff_milestones::milestones;
use super::payoff_model::{
    DebtPlanSummary, PayoffComparison, PayoffMilestone, PayoffOrdering, PayoffStrategy,
    PriorityMode, SimulationOptions,
};
use super::payoff_simulator::simulate_with_options;
use super::payoff_traits::PayoffServiceTrait;
use crate::debts::DebtAccount;
use crate::errors::Result;
use crate::utils::time_utils::Clock;

/// Service wrapping the payoff engine with a clock and default simulation options.
///
/// Holds no mutable state; every call works on its own copy of the debts, so a
/// single instance can be shared across threads.
pub struct PayoffService {
    clock: Arc<dyn Clock>,
    options: SimulationOptions,
}

impl PayoffService {
    pub fn new(clock: Arc<dyn Clock>, options: SimulationOptions) -> Self {
        Self { clock, options }
    }

    fn options_for(&self, priority_mode: Option<PriorityMode>) -> SimulationOptions {
        match priority_mode {
            Some(priority_mode) => SimulationOptions { priority_mode },
            None => self.options,
        }
    }
}

impl PayoffServiceTrait for PayoffService {
    fn simulate(
        &self,
        debts: &[DebtAccount],
        extra_payment: Decimal,
        ordering: &PayoffOrdering,
        priority_mode: Option<PriorityMode>,
    ) -> Result<PayoffStrategy> {
        let strategy = simulate_with_options(
            debts,
            extra_payment,
            ordering,
            self.clock.today(),
            self.options_for(priority_mode),
        )?;
        if strategy.did_not_converge {
            warn!(
                "{} plan does not pay off within {} months as configured",
                strategy.name, strategy.months_to_payoff
            );
        }
        Ok(strategy)
    }

    fn compare(&self, debts: &[DebtAccount], extra_payment: Decimal) -> Result<PayoffComparison> {
        let comparison =
            compare_with_options(debts, extra_payment, self.clock.today(), self.options)?;
        info!(
            "Compared payoff strategies for {} debts: snowball {} months, avalanche {} months",
            debts.len(),
            comparison.snowball.months_to_payoff,
            comparison.avalanche.months_to_payoff
        );
        Ok(comparison)
    }

    fn milestones(&self, strategy: &PayoffStrategy) -> Vec<PayoffMilestone> {
        milestones(strategy)
    }

    fn plan_summary(
        &self,
        debts: &[DebtAccount],
        extra_payment: Decimal,
        ordering: &PayoffOrdering,
        priority_mode: Option<PriorityMode>,
    ) -> Result<DebtPlanSummary> {
        let strategy = self.simulate(debts, extra_payment, ordering, priority_mode)?;
        DebtPlanSummary::from_strategy(&strategy, debts, extra_payment)
    }
}

//! Percent-paid-off checkpoints for a completed payoff schedule.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::payoff_model::{PayoffMilestone, PayoffStrategy};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MILESTONE_THRESHOLDS};

/// Extracts the 25/50/75/100% milestones from a strategy.
///
/// Progress is measured against the strategy's true starting balance and the
/// combined remaining balance of all debts at the end of each month. A threshold
/// the schedule never reaches (e.g. the simulation hit its month cap) yields no
/// milestone, so fewer than four entries is a valid result.
pub fn milestones(strategy: &PayoffStrategy) -> Vec<PayoffMilestone> {
    let initial_total = strategy.starting_balance;
    if initial_total <= Decimal::ZERO {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(MILESTONE_THRESHOLDS.len());
    let mut thresholds = MILESTONE_THRESHOLDS.iter().peekable();
    let schedule = &strategy.schedule;
    let mut start = 0;

    while start < schedule.len() {
        let month = schedule[start].month;
        let end = schedule[start..]
            .iter()
            .position(|row| row.month != month)
            .map_or(schedule.len(), |offset| start + offset);

        // Debts without a row this month are already paid off
        let remaining = schedule[start..end]
            .iter()
            .try_fold(Decimal::ZERO, |acc, row| acc.checked_add(row.remaining_balance));
        let Some(remaining) = remaining else {
            start = end;
            continue;
        };
        let amount_paid = initial_total - remaining;

        while let Some(threshold) = thresholds.next_if(|t| amount_paid >= **t * initial_total) {
            let percent = percent_label(*threshold);
            let (title, description) = milestone_text(percent);
            result.push(PayoffMilestone {
                percent,
                title,
                description,
                month,
                target_date: schedule[start].date,
                amount_paid: amount_paid.round_dp(DISPLAY_DECIMAL_PRECISION),
                remaining_debt: remaining.round_dp(DISPLAY_DECIMAL_PRECISION),
            });
        }

        if thresholds.peek().is_none() {
            break;
        }
        start = end;
    }

    result
}

fn percent_label(threshold: Decimal) -> u32 {
    (threshold * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or(0)
}

fn milestone_text(percent: u32) -> (String, String) {
    match percent {
        100 => (
            "Debt Free!".to_string(),
            "Congratulations! Every balance is paid off. Time to celebrate and start building wealth."
                .to_string(),
        ),
        50 => (
            "Halfway There".to_string(),
            "Half of your starting debt is gone. Keep the momentum going!".to_string(),
        ),
        p => (
            format!("{}% Paid Off", p),
            format!("You have paid off {}% of your starting debt.", p),
        ),
    }
}

//! Month-by-month amortization of a set of debts under one prioritization rule.
//!
//! Every month each open debt receives its minimum payment, then the extra payment
//! goes to a single priority debt. The extra is folded into the row already written
//! for that debt in the same month, so there is exactly one row per (month, debt).

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::payoff_model::{
    PaymentScheduleEntry, PayoffOrdering, PayoffStrategy, PriorityMode, SimulationOptions,
};
use crate::constants::SAFETY_CAP_MONTHS;
use crate::debts::{total_balance, validate_debts, validate_extra_payment, DebtAccount};
use crate::errors::{Error, Result};
use crate::utils::time_utils::add_months;

/// Simulates a payoff with the priority order fixed up front.
pub fn simulate(
    debts: &[DebtAccount],
    extra_payment: Decimal,
    ordering: &PayoffOrdering,
    today: NaiveDate,
) -> Result<PayoffStrategy> {
    simulate_with_options(
        debts,
        extra_payment,
        ordering,
        today,
        SimulationOptions::default(),
    )
}

/// Simulates a payoff.
///
/// `today` anchors date projection: month `n` is dated `today + n months`.
/// The caller's debts are never modified; the simulation works on a sorted copy.
pub fn simulate_with_options(
    debts: &[DebtAccount],
    extra_payment: Decimal,
    ordering: &PayoffOrdering,
    today: NaiveDate,
    options: SimulationOptions,
) -> Result<PayoffStrategy> {
    validate_debts(debts)?;
    validate_extra_payment(extra_payment)?;

    let mut working = sorted_working_copy(debts, ordering)?;
    let starting_balance = total_balance(&working)?;

    let mut schedule: Vec<PaymentScheduleEntry> = Vec::new();
    let mut total_interest = Decimal::ZERO;
    let mut total_payments = Decimal::ZERO;
    let mut month: u32 = 0;
    // Index into `schedule` of each debt's row for the current month
    let mut rows_this_month: Vec<Option<usize>> = vec![None; working.len()];

    while working.iter().any(|d| d.balance > Decimal::ZERO) && month < SAFETY_CAP_MONTHS {
        month += 1;
        let date = add_months(today, month);
        rows_this_month.fill(None);

        for (idx, debt) in working.iter_mut().enumerate() {
            if debt.balance <= Decimal::ZERO {
                continue;
            }

            let interest = checked(
                debt.balance.checked_mul(debt.monthly_rate()),
                &debt.id,
                month,
            )?;
            // The minimum, capped at what is owed. Principal goes negative when
            // the minimum does not cover interest; the balance then grows.
            let owed = checked(debt.balance.checked_add(interest), &debt.id, month)?;
            let payment = debt.minimum_payment.min(owed);
            let principal = payment - interest;
            debt.balance = checked(debt.balance.checked_sub(principal), &debt.id, month)?;

            total_interest = checked(total_interest.checked_add(interest), &debt.id, month)?;
            total_payments = checked(total_payments.checked_add(payment), &debt.id, month)?;

            rows_this_month[idx] = Some(schedule.len());
            schedule.push(PaymentScheduleEntry {
                month,
                date,
                debt_id: debt.id.clone(),
                debt_name: debt.name.clone(),
                payment,
                principal,
                interest,
                remaining_balance: debt.balance.max(Decimal::ZERO),
            });
        }

        if extra_payment > Decimal::ZERO {
            if let Some(idx) = priority_index(&working, ordering, options.priority_mode) {
                let debt = &mut working[idx];
                let extra = extra_payment.min(debt.balance);
                debt.balance = checked(debt.balance.checked_sub(extra), &debt.id, month)?;
                total_payments = checked(total_payments.checked_add(extra), &debt.id, month)?;

                if let Some(row) = rows_this_month[idx].and_then(|i| schedule.get_mut(i)) {
                    row.payment = checked(row.payment.checked_add(extra), &debt.id, month)?;
                    row.principal = checked(row.principal.checked_add(extra), &debt.id, month)?;
                    row.remaining_balance = debt.balance.max(Decimal::ZERO);
                }
            }
        }
    }

    let ending_balance = total_balance(&working)?;
    let did_not_converge = ending_balance > Decimal::ZERO;
    let kind = ordering.kind();

    if did_not_converge {
        let stuck: Vec<&str> = working
            .iter()
            .filter(|d| d.balance > Decimal::ZERO)
            .map(|d| d.name.as_str())
            .collect();
        warn!(
            "{} did not converge within {} months; still owing {} on {:?}",
            kind.display_name(),
            SAFETY_CAP_MONTHS,
            ending_balance,
            stuck
        );
    }

    debug!(
        "Simulated {} for {} debts: {} months, interest {}, payments {}",
        kind.display_name(),
        working.len(),
        month,
        total_interest,
        total_payments
    );

    Ok(PayoffStrategy {
        name: kind.display_name().to_string(),
        description: kind.description().to_string(),
        kind,
        total_interest,
        total_payments,
        months_to_payoff: month,
        payoff_date: add_months(today, month),
        starting_balance,
        ending_balance,
        did_not_converge,
        schedule,
    })
}

/// Clones the debts and stable-sorts them by the ordering.
fn sorted_working_copy(
    debts: &[DebtAccount],
    ordering: &PayoffOrdering,
) -> Result<Vec<DebtAccount>> {
    if let PayoffOrdering::Custom(order) = ordering {
        let known: HashSet<&str> = debts.iter().map(|d| d.id.as_str()).collect();
        let mut listed = HashSet::with_capacity(order.len());
        for id in order {
            if !known.contains(id.as_str()) {
                return Err(Error::invalid_input(format!(
                    "Custom order references unknown debt id '{}'",
                    id
                )));
            }
            if !listed.insert(id.as_str()) {
                return Err(Error::invalid_input(format!(
                    "Custom order lists debt id '{}' more than once",
                    id
                )));
            }
        }
    }

    let mut working = debts.to_vec();
    working.sort_by(|a, b| ordering.priority_cmp(a, b));
    Ok(working)
}

/// Finds the debt that receives this month's extra payment.
fn priority_index(
    working: &[DebtAccount],
    ordering: &PayoffOrdering,
    mode: PriorityMode,
) -> Option<usize> {
    let open = working
        .iter()
        .enumerate()
        .filter(|(_, d)| d.balance > Decimal::ZERO);

    match mode {
        PriorityMode::Fixed => open.map(|(idx, _)| idx).next(),
        PriorityMode::Rerank => open
            .min_by(|(ia, a), (ib, b)| ordering.priority_cmp(a, b).then(ia.cmp(ib)))
            .map(|(idx, _)| idx),
    }
}

fn checked(value: Option<Decimal>, debt_id: &str, month: u32) -> Result<Decimal> {
    value.ok_or_else(|| {
        Error::Calculation(format!(
            "Amount overflow for debt '{}' in month {}",
            debt_id, month
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::DebtAccountType;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn debt(id: &str, balance: Decimal, minimum: Decimal, rate: Decimal) -> DebtAccount {
        DebtAccount::new(
            id,
            format!("Debt {}", id),
            balance,
            minimum,
            rate,
            DebtAccountType::CreditCard,
        )
    }

    fn two_debts() -> Vec<DebtAccount> {
        vec![
            debt("a", dec!(1000), dec!(50), dec!(24)),
            debt("b", dec!(3000), dec!(90), dec!(12)),
        ]
    }

    fn rows_for<'a>(strategy: &'a PayoffStrategy, id: &str) -> Vec<&'a PaymentScheduleEntry> {
        strategy.schedule.iter().filter(|r| r.debt_id == id).collect()
    }

    #[test]
    fn test_single_debt_paid_in_one_month() {
        let debts = vec![debt("a", dec!(600), dec!(600), dec!(0))];
        let result = simulate(&debts, dec!(0), &PayoffOrdering::Snowball, today()).unwrap();

        assert_eq!(result.months_to_payoff, 1);
        assert_eq!(result.total_interest, dec!(0));
        assert_eq!(result.total_payments, dec!(600));
        assert_eq!(result.schedule.len(), 1);
        assert_eq!(result.schedule[0].remaining_balance, dec!(0));
        assert_eq!(
            result.payoff_date,
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
        assert!(!result.did_not_converge);
    }

    #[test]
    fn test_first_month_with_extra_payment() {
        let result = simulate(&two_debts(), dec!(100), &PayoffOrdering::Avalanche, today()).unwrap();

        let first_a = &result.schedule[0];
        assert_eq!(first_a.month, 1);
        assert_eq!(first_a.debt_id, "a");
        assert_eq!(first_a.interest, dec!(20));
        assert_eq!(first_a.principal, dec!(130));
        assert_eq!(first_a.payment, dec!(150));
        assert_eq!(first_a.remaining_balance, dec!(870));

        let first_b = &result.schedule[1];
        assert_eq!(first_b.debt_id, "b");
        assert_eq!(first_b.interest, dec!(30));
        assert_eq!(first_b.principal, dec!(60));
        assert_eq!(first_b.payment, dec!(90));
        assert_eq!(first_b.remaining_balance, dec!(2940));
    }

    #[test]
    fn test_extra_redirects_after_priority_debt_is_paid() {
        let result = simulate(&two_debts(), dec!(100), &PayoffOrdering::Avalanche, today()).unwrap();

        let a_rows = rows_for(&result, "a");
        let last_a_month = a_rows.last().unwrap().month;
        assert_eq!(a_rows.last().unwrap().remaining_balance, dec!(0));

        let b_next = result
            .schedule
            .iter()
            .find(|r| r.debt_id == "b" && r.month == last_a_month + 1)
            .unwrap();
        assert_eq!(b_next.payment, dec!(190));
    }

    #[test]
    fn test_one_row_per_debt_per_month() {
        let result = simulate(&two_debts(), dec!(100), &PayoffOrdering::Snowball, today()).unwrap();

        let mut seen = HashSet::new();
        for row in &result.schedule {
            assert!(seen.insert((row.month, row.debt_id.clone())));
        }
        // Month-major, then debt order within the month
        for pair in result.schedule.windows(2) {
            assert!(pair[0].month <= pair[1].month);
        }
    }

    #[test]
    fn test_conservation_of_payments() {
        let result = simulate(&two_debts(), dec!(100), &PayoffOrdering::Snowball, today()).unwrap();
        let principal_paid = result.starting_balance - result.ending_balance;
        let diff = (result.total_payments - (result.total_interest + principal_paid)).abs();
        assert!(diff < dec!(0.000001), "diff was {}", diff);
        assert_eq!(result.ending_balance, dec!(0));
    }

    #[test]
    fn test_non_converging_debt_hits_cap() {
        let debts = vec![debt("a", dec!(1200), dec!(10), dec!(24))];
        let result = simulate(&debts, dec!(0), &PayoffOrdering::Snowball, today()).unwrap();

        assert!(result.did_not_converge);
        assert_eq!(result.months_to_payoff, SAFETY_CAP_MONTHS);
        assert_eq!(result.schedule.len(), SAFETY_CAP_MONTHS as usize);
        // Interest of 24 exceeds the 10 payment, so the balance grows
        assert_eq!(result.schedule[0].principal, dec!(-14));
        assert_eq!(result.schedule[0].remaining_balance, dec!(1214));
        assert!(result.ending_balance > dec!(1200));
    }

    #[test]
    fn test_empty_input_is_zero_month_strategy() {
        let result = simulate(&[], dec!(100), &PayoffOrdering::Avalanche, today()).unwrap();
        assert_eq!(result.months_to_payoff, 0);
        assert!(result.schedule.is_empty());
        assert_eq!(result.payoff_date, today());
        assert_eq!(result.total_payments, dec!(0));
        assert!(!result.did_not_converge);
    }

    #[test]
    fn test_paid_off_debt_gets_no_rows() {
        let debts = vec![
            debt("done", dec!(0), dec!(25), dec!(20)),
            debt("open", dec!(100), dec!(50), dec!(0)),
        ];
        let result = simulate(&debts, dec!(0), &PayoffOrdering::Snowball, today()).unwrap();
        assert!(rows_for(&result, "done").is_empty());
        assert_eq!(result.months_to_payoff, 2);
    }

    #[test]
    fn test_input_debts_untouched() {
        let debts = two_debts();
        let before = debts.clone();
        simulate(&debts, dec!(100), &PayoffOrdering::Snowball, today()).unwrap();
        assert_eq!(debts, before);
    }

    #[test]
    fn test_snowball_ties_keep_input_order() {
        let debts = vec![
            debt("first", dec!(500), dec!(25), dec!(10)),
            debt("second", dec!(500), dec!(25), dec!(20)),
        ];
        let result = simulate(&debts, dec!(50), &PayoffOrdering::Snowball, today()).unwrap();
        assert_eq!(result.schedule[0].debt_id, "first");
        assert_eq!(result.schedule[0].payment, dec!(75));
    }

    #[test]
    fn test_custom_order() {
        let ordering = PayoffOrdering::Custom(vec!["b".to_string()]);
        let result = simulate(&two_debts(), dec!(100), &ordering, today()).unwrap();
        assert_eq!(result.name, "Custom Order");
        assert_eq!(result.schedule[0].debt_id, "b");
        assert_eq!(result.schedule[0].payment, dec!(190));
        assert_eq!(result.schedule[1].debt_id, "a");
    }

    #[test]
    fn test_custom_order_rejects_unknown_and_duplicate_ids() {
        let unknown = PayoffOrdering::Custom(vec!["zzz".to_string()]);
        assert!(simulate(&two_debts(), dec!(0), &unknown, today()).is_err());

        let dupes = PayoffOrdering::Custom(vec!["a".to_string(), "a".to_string()]);
        assert!(simulate(&two_debts(), dec!(0), &dupes, today()).is_err());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(simulate(&two_debts(), dec!(-1), &PayoffOrdering::Snowball, today()).is_err());
        let bad = vec![debt("a", dec!(-5), dec!(10), dec!(5))];
        assert!(simulate(&bad, dec!(0), &PayoffOrdering::Snowball, today()).is_err());
    }

    #[test]
    fn test_rerank_moves_extra_to_new_smallest_balance() {
        let debts = vec![
            debt("x", dec!(1000), dec!(20), dec!(0)),
            debt("y", dec!(1010), dec!(500), dec!(0)),
        ];

        let fixed = simulate(&debts, dec!(10), &PayoffOrdering::Snowball, today()).unwrap();
        let fixed_y = rows_for(&fixed, "y");
        assert_eq!(fixed_y[1].remaining_balance, dec!(10));
        assert_eq!(fixed_y.len(), 3);

        let rerank = simulate_with_options(
            &debts,
            dec!(10),
            &PayoffOrdering::Snowball,
            today(),
            SimulationOptions {
                priority_mode: PriorityMode::Rerank,
            },
        )
        .unwrap();
        let rerank_y = rows_for(&rerank, "y");
        assert_eq!(rerank_y[0].payment, dec!(510));
        assert_eq!(rerank_y[0].remaining_balance, dec!(500));
        assert_eq!(rerank_y[1].remaining_balance, dec!(0));
        assert_eq!(rerank_y.len(), 2);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let first = simulate(&two_debts(), dec!(100), &PayoffOrdering::Avalanche, today()).unwrap();
        let second = simulate(&two_debts(), dec!(100), &PayoffOrdering::Avalanche, today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_balance_total_overflow_is_a_calculation_error() {
        let huge = dec!(50_000_000_000_000_000_000_000_000_000);
        let debts = vec![
            debt("a", huge, dec!(100), dec!(0)),
            debt("b", huge, dec!(100), dec!(0)),
        ];
        assert!(validate_debts(&debts).is_ok());

        let result = simulate(&debts, dec!(0), &PayoffOrdering::Snowball, today());
        assert!(matches!(result, Err(Error::Calculation(_))));
    }
}

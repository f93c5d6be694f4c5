//! Snowball vs. avalanche comparison.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::payoff_model::{
    PayoffComparison, PayoffOrdering, PayoffSavings, PayoffStrategy, RecommendedStrategy,
    SimulationOptions,
};
use super::payoff_simulator::simulate_with_options;
use crate::constants::AVALANCHE_RECOMMENDATION_THRESHOLD;
use crate::debts::DebtAccount;
use crate::errors::Result;

pub fn compare(
    debts: &[DebtAccount],
    extra_payment: Decimal,
    today: NaiveDate,
) -> Result<PayoffComparison> {
    compare_with_options(debts, extra_payment, today, SimulationOptions::default())
}

/// Runs both strategies on independent copies of `debts` and derives the savings.
pub fn compare_with_options(
    debts: &[DebtAccount],
    extra_payment: Decimal,
    today: NaiveDate,
    options: SimulationOptions,
) -> Result<PayoffComparison> {
    let snowball = simulate_with_options(
        debts,
        extra_payment,
        &PayoffOrdering::Snowball,
        today,
        options,
    )?;
    let avalanche = simulate_with_options(
        debts,
        extra_payment,
        &PayoffOrdering::Avalanche,
        today,
        options,
    )?;

    let savings = savings_between(&snowball, &avalanche);
    debug!(
        "Avalanche saves {} months and {} interest over snowball; recommending {:?}",
        savings.time_saved, savings.interest_saved, savings.recommended_strategy
    );

    Ok(PayoffComparison {
        snowball,
        avalanche,
        savings,
    })
}

/// Savings of `avalanche` relative to `snowball`. Negative values are valid.
pub fn savings_between(snowball: &PayoffStrategy, avalanche: &PayoffStrategy) -> PayoffSavings {
    let time_saved = i64::from(snowball.months_to_payoff) - i64::from(avalanche.months_to_payoff);
    let interest_saved = snowball.total_interest - avalanche.total_interest;
    let recommended_strategy = if interest_saved > AVALANCHE_RECOMMENDATION_THRESHOLD {
        RecommendedStrategy::Avalanche
    } else {
        RecommendedStrategy::Snowball
    };

    PayoffSavings {
        time_saved,
        interest_saved,
        recommended_strategy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::DebtAccountType;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn debt(id: &str, balance: Decimal, minimum: Decimal, rate: Decimal) -> DebtAccount {
        DebtAccount::new(id, id, balance, minimum, rate, DebtAccountType::CreditCard)
    }

    fn empty_strategy() -> PayoffStrategy {
        simulate_with_options(
            &[],
            dec!(0),
            &PayoffOrdering::Snowball,
            today(),
            SimulationOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_debt_has_no_savings() {
        let debts = vec![debt("a", dec!(5000), dec!(150), dec!(19.99))];
        let result = compare(&debts, dec!(200), today()).unwrap();

        assert_eq!(result.savings.time_saved, 0);
        assert_eq!(result.savings.interest_saved, dec!(0));
        assert_eq!(
            result.savings.recommended_strategy,
            RecommendedStrategy::Snowball
        );
        assert_eq!(result.snowball.name, "Debt Snowball");
        assert_eq!(result.avalanche.name, "Debt Avalanche");
    }

    #[test]
    fn test_coinciding_orderings_produce_identical_schedules() {
        // The smallest balance also carries the highest rate
        let debts = vec![
            debt("a", dec!(1000), dec!(50), dec!(24)),
            debt("b", dec!(3000), dec!(90), dec!(12)),
        ];
        let result = compare(&debts, dec!(100), today()).unwrap();

        assert_eq!(result.snowball.schedule, result.avalanche.schedule);
        assert_eq!(result.savings.time_saved, 0);
        assert_eq!(result.savings.interest_saved, dec!(0));
    }

    #[test]
    fn test_recommends_avalanche_when_savings_are_large() {
        // Small low-rate loan vs. large high-rate card
        let debts = vec![
            debt("loan", dec!(2000), dec!(60), dec!(3)),
            debt("card", dec!(15000), dec!(300), dec!(29.99)),
        ];
        let result = compare(&debts, dec!(500), today()).unwrap();

        assert!(result.savings.interest_saved > dec!(500));
        assert_eq!(
            result.savings.recommended_strategy,
            RecommendedStrategy::Avalanche
        );
        assert_eq!(
            result.savings.interest_saved,
            result.snowball.total_interest - result.avalanche.total_interest
        );
    }

    #[test]
    fn test_savings_can_be_negative() {
        let mut snowball = empty_strategy();
        let mut avalanche = snowball.clone();
        snowball.months_to_payoff = 10;
        snowball.total_interest = dec!(100);
        avalanche.months_to_payoff = 12;
        avalanche.total_interest = dec!(150);

        let savings = savings_between(&snowball, &avalanche);
        assert_eq!(savings.time_saved, -2);
        assert_eq!(savings.interest_saved, dec!(-50));
        assert_eq!(savings.recommended_strategy, RecommendedStrategy::Snowball);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut snowball = empty_strategy();
        let avalanche = snowball.clone();
        snowball.total_interest = dec!(500);
        assert_eq!(
            savings_between(&snowball, &avalanche).recommended_strategy,
            RecommendedStrategy::Snowball
        );
        snowball.total_interest = dec!(500.01);
        assert_eq!(
            savings_between(&snowball, &avalanche).recommended_strategy,
            RecommendedStrategy::Avalanche
        );
    }

    #[test]
    fn test_invalid_input_propagates() {
        let debts = vec![debt("a", dec!(100), dec!(10), dec!(5))];
        assert!(compare(&debts, dec!(-5), today()).is_err());
    }
}

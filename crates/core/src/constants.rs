use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Hard limit on simulated months (50 years). Guards against debts whose minimum
/// payment never covers the accruing interest.
pub const SAFETY_CAP_MONTHS: u32 = 600;

/// Interest saved (in currency units) above which avalanche is recommended over snowball.
pub const AVALANCHE_RECOMMENDATION_THRESHOLD: Decimal = dec!(500);

/// Divisor turning an annual percentage rate into a monthly periodic rate (100 * 12).
pub const MONTHLY_RATE_DIVISOR: Decimal = dec!(1200);

/// Fractions of the starting balance reported as payoff milestones
pub const MILESTONE_THRESHOLDS: [Decimal; 4] = [dec!(0.25), dec!(0.50), dec!(0.75), dec!(1.00)];

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

pub const SNOWBALL_STRATEGY_NAME: &str = "Debt Snowball";
pub const AVALANCHE_STRATEGY_NAME: &str = "Debt Avalanche";
pub const CUSTOM_STRATEGY_NAME: &str = "Custom Order";

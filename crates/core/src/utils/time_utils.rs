use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone used to decide what "today" is when projecting payoff dates.
pub const DEFAULT_PROJECTION_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a calendar date in the given timezone.
pub fn projection_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the default projection timezone.
pub fn projection_date_today() -> NaiveDate {
    projection_date_from_utc(Utc::now(), DEFAULT_PROJECTION_TZ)
}

/// Adds whole calendar months to a date.
///
/// Days past the end of the target month are clamped (Jan 31 + 1 month = Feb 28/29).
/// Saturates at `NaiveDate::MAX` instead of panicking.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Source of the "today" anchor for date projection.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in [`DEFAULT_PROJECTION_TZ`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        projection_date_today()
    }
}

/// Clock pinned to a single date, for reproducible schedules.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_months_simple() {
        assert_eq!(add_months(date(2024, 1, 15), 1), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 11, 15), 3), date(2025, 2, 15));
        assert_eq!(add_months(date(2024, 1, 15), 0), date(2024, 1, 15));
    }

    #[test]
    fn test_add_months_clamps_end_of_month() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
    }

    #[test]
    fn test_add_months_fifty_years() {
        assert_eq!(add_months(date(2024, 6, 1), 600), date(2074, 6, 1));
    }

    #[test]
    fn test_projection_date_uses_timezone() {
        // 02:00 UTC is still the previous evening in New York
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap();
        assert_eq!(
            projection_date_from_utc(instant, DEFAULT_PROJECTION_TZ),
            date(2024, 3, 9)
        );
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2025, 1, 1));
        assert_eq!(clock.today(), date(2025, 1, 1));
        assert_eq!(clock.today(), clock.today());
    }
}

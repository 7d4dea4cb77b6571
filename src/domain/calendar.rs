//! Calendar-day arithmetic
//!
//! Everything here works on [`NaiveDate`] so that the time of day can never
//! leak into a day count.

use chrono::{Datelike, Days, Local, NaiveDate};
use color_eyre::eyre::{eyre, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today". Injected so that day counts are testable.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock, truncated to the calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole calendar days from `start` to `today`, exclusive of `start`.
///
/// A `start` in the future counts as zero.
pub fn days_between(start: NaiveDate, today: NaiveDate) -> u64 {
    u64::try_from((today - start).num_days()).unwrap_or(0)
}

pub fn format_days_together(days: u64) -> String {
    format!("{days} days together")
}

/// Parses a `YYYY-MM-DD` date, rejecting impossible dates such as `2023-02-30`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(eyre!("date must not be empty"));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| eyre!("invalid date '{trimmed}' (expected YYYY-MM-DD): {e}"))
}

/// Month header as shown above the calendar, e.g. `April 2023`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Moves `date` by `days` calendar days, saturating at the representable range.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() >= 6
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[rstest]
    #[case(date(2022, 6, 15), date(2023, 4, 1), 290)]
    #[case(date(2022, 6, 15), date(2022, 6, 15), 0)]
    #[case(date(2022, 6, 15), date(2022, 6, 16), 1)]
    #[case(date(2024, 2, 28), date(2024, 3, 1), 2)]
    #[case(date(2023, 2, 28), date(2023, 3, 1), 1)]
    fn test_days_between(#[case] start: NaiveDate, #[case] today: NaiveDate, #[case] days: u64) {
        assert_eq!(days_between(start, today), days);
    }

    #[test]
    fn test_days_between_future_start_is_zero() {
        assert_eq!(days_between(date(2030, 1, 1), date(2023, 4, 1)), 0);
    }

    #[test]
    fn test_days_between_strictly_increases() {
        let start = date(2022, 6, 15);
        let mut previous = days_between(start, start);
        for offset in 1..800 {
            let current = days_between(start, shift_days(start, offset));
            assert!(current > previous, "{current} should exceed {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_time_of_day_is_irrelevant() {
        let start = date(2022, 6, 15);
        let morning = date(2023, 4, 1).and_hms_opt(0, 0, 1).expect("valid time");
        let night = date(2023, 4, 1).and_hms_opt(23, 59, 59).expect("valid time");
        assert_eq!(
            days_between(start, morning.date()),
            days_between(start, night.date())
        );
    }

    #[test]
    fn test_format_days_together() {
        assert_eq!(format_days_together(290), "290 days together");
        assert_eq!(format_days_together(0), "0 days together");
    }

    #[rstest]
    #[case("2022-06-15", date(2022, 6, 15))]
    #[case(" 2023-04-01 ", date(2023, 4, 1))]
    fn test_parse_date(#[case] input: &str, #[case] expected: NaiveDate) -> Result<()> {
        assert_eq!(parse_date(input)?, expected);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("2023-02-30")]
    #[case("15/06/2022")]
    #[case("tomorrow")]
    fn test_parse_date_rejects(#[case] input: &str) {
        assert!(parse_date(input).is_err());
    }

    #[test]
    fn test_parse_date_error_names_input() {
        let err = parse_date("2023-13-01").expect_err("month 13 is invalid");
        assert!(format!("{err}").contains("2023-13-01"));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(2023, 4, 1)), "April 2023");
        assert_eq!(month_label(date(2026, 10, 16)), "October 2026");
    }

    #[test]
    fn test_shift_days() {
        assert_eq!(shift_days(date(2023, 4, 1), 1), date(2023, 4, 2));
        assert_eq!(shift_days(date(2023, 4, 1), -1), date(2023, 3, 31));
        assert_eq!(shift_days(date(2023, 4, 1), 7), date(2023, 4, 8));
        assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2023, 4, 1))); // Saturday
        assert!(is_weekend(date(2023, 4, 2))); // Sunday
        assert!(!is_weekend(date(2023, 4, 3)));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2023, 4, 1));
        assert_eq!(clock.today(), date(2023, 4, 1));
    }
}

//! Monday-to-Sunday week arithmetic.

use crate::core::parse::parse_moment;
use crate::domain::model::WeekBounds;
use crate::domain::ports::Clock;
use crate::utils::error::{DateError, Result};
use chrono::{Datelike, Days, NaiveDate, TimeDelta};

// Day offset from `date` back to its Monday. Weekday index counts from
// Sunday = 0, and Sunday belongs to the week that started six days earlier.
fn monday_offset(date: NaiveDate) -> i64 {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let adjustment = if weekday == 0 { -6 } else { 1 };
    adjustment - weekday
}

/// Monday of the week containing `date`, as a new value. `None` when that
/// Monday lies before `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::days(monday_offset(date)))
}

/// Sunday of the week containing `date`. `None` outside chrono's range.
pub fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    week_start(date)?.checked_add_days(Days::new(6))
}

pub fn week_bounds_for(date: NaiveDate) -> Result<WeekBounds> {
    let out_of_range = || DateError::invalid_input(&date.to_string(), "week falls outside the supported range");

    let start = week_start(date).ok_or_else(out_of_range)?;
    let end = start.checked_add_days(Days::new(6)).ok_or_else(out_of_range)?;
    Ok(WeekBounds { start, end })
}

/// Week around `reference`, or around the clock's current date when the
/// reference is missing or blank.
pub fn week_bounds(reference: Option<&str>, clock: &dyn Clock) -> Result<WeekBounds> {
    let date = match reference.map(str::trim) {
        None | Some("") => clock.now().date_naive(),
        Some(text) => parse_moment(text)?.calendar_date(),
    };

    let bounds = week_bounds_for(date)?;
    tracing::debug!(
        "Week of {} runs {} to {}",
        date,
        bounds.start,
        bounds.end
    );
    Ok(bounds)
}

/// Weekly occurrences from `start` up to and including `end`.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> usize {
    if end < start {
        return 0;
    }
    let days = (end - start).num_days();
    usize::try_from(days / 7).map_or(0, |weeks| weeks + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_maps_to_itself() {
        assert_eq!(week_start(ymd(2024, 6, 10)), Some(ymd(2024, 6, 10)));
        assert_eq!(week_end(ymd(2024, 6, 10)), Some(ymd(2024, 6, 16)));
    }

    #[test]
    fn test_sunday_maps_to_previous_monday() {
        assert_eq!(week_start(ymd(2024, 6, 16)), Some(ymd(2024, 6, 10)));
        assert_eq!(week_end(ymd(2024, 6, 16)), Some(ymd(2024, 6, 16)));
    }

    #[test]
    fn test_every_day_of_a_week() {
        for day in 10..=16 {
            let bounds = week_bounds_for(ymd(2024, 6, day)).unwrap();
            assert_eq!(bounds.start, ymd(2024, 6, 10), "day {}", day);
            assert_eq!(bounds.end, ymd(2024, 6, 16), "day {}", day);
        }
    }

    #[test]
    fn test_week_spanning_year_end() {
        // 2025-01-01 is a Wednesday.
        let bounds = week_bounds_for(ymd(2025, 1, 1)).unwrap();
        assert_eq!(bounds.start, ymd(2024, 12, 30));
        assert_eq!(bounds.end, ymd(2025, 1, 5));
    }

    #[test]
    fn test_week_start_does_not_touch_argument() {
        let date = ymd(2024, 6, 13);
        let start = week_start(date);
        assert_eq!(date, ymd(2024, 6, 13));
        assert_eq!(start, Some(ymd(2024, 6, 10)));
    }

    #[test]
    fn test_bounds_from_reference_strings() {
        let clock = FixedClock::from_rfc3339("2000-01-01T00:00:00Z").unwrap();
        let bounds = week_bounds(Some("2024-06-16"), &clock).unwrap();
        assert_eq!(
            bounds.format("%Y-%m-%d").unwrap(),
            ("2024-06-10".to_string(), "2024-06-16".to_string())
        );

        let bounds = week_bounds(Some("2024-06-16T23:30:00-05:00"), &clock).unwrap();
        assert_eq!(bounds.start, ymd(2024, 6, 10));
    }

    #[test]
    fn test_missing_reference_uses_clock() {
        // 2024-06-12 is a Wednesday.
        let clock = FixedClock::from_rfc3339("2024-06-12T08:00:00+01:00").unwrap();
        for reference in [None, Some(""), Some("  ")] {
            let bounds = week_bounds(reference, &clock).unwrap();
            assert_eq!(bounds.start, ymd(2024, 6, 10));
            assert_eq!(bounds.end, ymd(2024, 6, 16));
        }
    }

    #[test]
    fn test_invalid_reference_fails() {
        let clock = FixedClock::from_rfc3339("2024-06-12T08:00:00Z").unwrap();
        assert!(week_bounds(Some("not-a-date"), &clock).is_err());
    }

    #[test]
    fn test_range_edges_return_none_instead_of_panicking() {
        // NaiveDate::MIN is a Thursday, so its Monday is out of range.
        assert_eq!(week_start(NaiveDate::MIN), None);
        assert_eq!(week_end(NaiveDate::MIN), None);

        let err = week_bounds_for(NaiveDate::MIN).unwrap_err();
        assert!(matches!(err, DateError::InvalidDateInput { .. }));

        // Whatever weekday MAX falls on, the helpers and the bounds agree.
        assert!(week_start(NaiveDate::MAX).is_some());
        assert_eq!(
            week_bounds_for(NaiveDate::MAX).is_ok(),
            week_end(NaiveDate::MAX).is_some()
        );
    }

    #[test]
    fn test_weeks_between() {
        let start = ymd(2024, 6, 10);
        assert_eq!(weeks_between(start, ymd(2024, 6, 9)), 0);
        assert_eq!(weeks_between(start, start), 1);
        assert_eq!(weeks_between(start, ymd(2024, 6, 16)), 1);
        assert_eq!(weeks_between(start, ymd(2024, 6, 17)), 2);
        assert_eq!(weeks_between(ymd(2024, 1, 1), ymd(2024, 12, 31)), 53);
    }
}

use chrono::{Datelike, NaiveDate, Weekday};
use date_utils::{week_bounds, week_start, weeks_between, FixedClock, WeekBounds};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::from_rfc3339("2024-06-12T12:00:00Z").unwrap()
}

#[test]
fn test_monday_reference() {
    let bounds = week_bounds(Some("2024-06-10"), &clock()).unwrap();
    assert_eq!(
        bounds.format("%Y-%m-%d").unwrap(),
        ("2024-06-10".to_string(), "2024-06-16".to_string())
    );
}

#[test]
fn test_sunday_reference_stays_in_its_own_week() {
    let bounds = week_bounds(Some("2024-06-16"), &clock()).unwrap();
    assert_eq!(
        bounds,
        WeekBounds {
            start: ymd(2024, 6, 10),
            end: ymd(2024, 6, 16),
        }
    );
}

#[test]
fn test_date_time_reference() {
    let bounds = week_bounds(Some("2024-06-16T22:15:00"), &clock()).unwrap();
    assert_eq!(bounds.start, ymd(2024, 6, 10));
}

#[test]
fn test_no_reference_uses_clock_date() {
    let bounds = week_bounds(None, &clock()).unwrap();
    assert!(bounds.contains(ymd(2024, 6, 12)));
    assert_eq!(bounds.start, ymd(2024, 6, 10));
}

#[test]
fn test_start_is_monday_and_end_is_sunday_all_year() {
    let mut date = ymd(2024, 1, 1);
    while date.year() == 2024 {
        let bounds = week_bounds(Some(date.to_string().as_str()), &clock()).unwrap();
        assert_eq!(bounds.start.weekday(), Weekday::Mon, "{}", date);
        assert_eq!(bounds.end.weekday(), Weekday::Sun, "{}", date);
        assert!(bounds.contains(date), "{}", date);
        assert_eq!(Some(bounds.start), week_start(date));
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_invalid_reference() {
    assert!(week_bounds(Some("not-a-date"), &clock()).is_err());
}

#[test]
fn test_weeks_between_counts_inclusive_occurrences() {
    assert_eq!(weeks_between(ymd(2024, 6, 10), ymd(2024, 6, 10)), 1);
    assert_eq!(weeks_between(ymd(2024, 6, 10), ymd(2024, 7, 1)), 4);
    assert_eq!(weeks_between(ymd(2024, 7, 1), ymd(2024, 6, 10)), 0);
}

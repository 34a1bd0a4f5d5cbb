use crate::domain::model::{DayOverflow, ISO_DATE_FORMAT};
use crate::utils::error::{DateError, Result};
use chrono::{Days, NaiveDate};

/// Parses picker text in `day/month/year` form.
///
/// The date is built without any time-of-day or time zone, so the result is
/// the calendar day that was picked whatever the host's offset.
pub fn parse_day_month_year(text: &str, overflow: DayOverflow) -> Result<NaiveDate> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 3 {
        return Err(DateError::invalid_input(
            text,
            format!("expected day/month/year, found {} component(s)", parts.len()),
        ));
    }

    let day = parse_component(text, "day", parts[0])?;
    let month = parse_component(text, "month", parts[1])?;
    let year = parse_component(text, "year", parts[2])?;

    let date = match overflow {
        DayOverflow::Reject => strict_date(text, year, month, day)?,
        DayOverflow::Rollover => rolled_over_date(text, year, month, day)?,
    };

    tracing::debug!("Parsed picker date {:?} as {}", text, date);
    Ok(date)
}

/// `day/month/year` text to `YYYY-MM-DD`, rolling out-of-range days over.
pub fn normalize_iso_date(text: &str) -> Result<String> {
    normalize_iso_date_with(text, DayOverflow::default())
}

pub fn normalize_iso_date_with(text: &str, overflow: DayOverflow) -> Result<String> {
    let date = parse_day_month_year(text, overflow)?;
    Ok(date.format(ISO_DATE_FORMAT).to_string())
}

fn parse_component(text: &str, name: &str, raw: &str) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        DateError::invalid_input(text, format!("{} component {:?} is not an integer", name, raw))
    })
}

fn strict_date(text: &str, year: i32, month: i32, day: i32) -> Result<NaiveDate> {
    let month = u32::try_from(month).ok();
    let day = u32::try_from(day).ok();
    month
        .zip(day)
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| DateError::invalid_input(text, "no such calendar date"))
}

// Months outside 1..=12 carry into the year, then the day is counted from the
// first of the resulting month, so day 0 is the last day of the month before.
fn rolled_over_date(text: &str, year: i32, month: i32, day: i32) -> Result<NaiveDate> {
    let out_of_range = || DateError::invalid_input(text, "date is outside the supported range");

    let month_index = i64::from(month) - 1;
    let year = i64::from(year) + month_index.div_euclid(12);
    let month = (month_index.rem_euclid(12) + 1) as u32;

    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;

    let offset = i64::from(day) - 1;
    let shifted = if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.ok_or_else(out_of_range)
}

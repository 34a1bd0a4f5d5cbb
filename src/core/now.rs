use crate::core::iso_date::parse_day_month_year;
use crate::domain::model::{DayOverflow, ISO_DATE_FORMAT};
use crate::domain::ports::Clock;
use crate::utils::error::Result;

/// Current wall-clock time as `" HH:MM:SS"`, leading space included.
pub fn current_time_of_day(clock: &dyn Clock) -> String {
    clock.now().format(" %H:%M:%S").to_string()
}

/// Current moment as `YYYY-MM-DDTHH:MM:SS` in the clock's own offset.
pub fn current_iso_datetime(clock: &dyn Clock) -> String {
    clock.now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Picker date followed by the current time of day: `"2021-03-05 14:03:09"`.
pub fn stamp_with_current_time(
    date_text: &str,
    overflow: DayOverflow,
    clock: &dyn Clock,
) -> Result<String> {
    let date = parse_day_month_year(date_text, overflow)?;
    let stamp = format!(
        "{}{}",
        date.format(ISO_DATE_FORMAT),
        current_time_of_day(clock)
    );
    tracing::debug!("Stamped {:?} as {:?}", date_text, stamp);
    Ok(stamp)
}

use crate::core::parse::parse_moment;
use crate::utils::error::{DateError, Result};
use chrono::{TimeZone, Utc};

/// Seconds since the Unix epoch. Strings without an offset are read as UTC.
pub fn extract_timestamp(input: &str) -> Result<f64> {
    extract_timestamp_in(input, &Utc)
}

/// Seconds since the Unix epoch, reading offset-less strings as wall-clock
/// time in `tz`.
pub fn extract_timestamp_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<f64> {
    let moment = parse_moment(input)?;
    let instant = moment
        .resolve_in(tz)
        .ok_or_else(|| DateError::invalid_input(input, "local time does not exist in this time zone"))?;

    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9;
    tracing::debug!("Extracted timestamp {} from {:?}", seconds, input);
    Ok(seconds)
}

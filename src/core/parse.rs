//! Parsing of free-form date and date-time strings.
//!
//! Accepted, in the order they are tried:
//! 1. RFC 3339 / ISO 8601 with offset: `"2024-06-10T09:00:00+02:00"`, `"2024-06-10T09:00:00Z"`
//! 2. RFC 2822: `"Mon, 10 Jun 2024 09:00:00 +0000"`
//! 3. ISO 8601 with a space separator and offset: `"2024-06-10 09:00:00+02:00"`
//! 4. ISO 8601 without offset, `T` or space separator, optional seconds and fraction
//! 5. Date only: `"2024-06-10"`

use crate::utils::error::{DateError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

const AWARE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%d %H:%M%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A parsed instant, or a wall-clock reading still waiting for a time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMoment {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl ParsedMoment {
    /// Calendar date as written, in the string's own offset.
    pub fn calendar_date(&self) -> NaiveDate {
        match self {
            ParsedMoment::Aware(dt) => dt.date_naive(),
            ParsedMoment::Naive(ndt) => ndt.date(),
        }
    }

    /// Pins a naive reading to `tz`. `None` when the wall-clock time does not
    /// exist there (DST gap); ambiguous readings take the earlier instant.
    pub fn resolve_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            ParsedMoment::Aware(dt) => Some(dt.with_timezone(&Utc)),
            ParsedMoment::Naive(ndt) => tz
                .from_local_datetime(ndt)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

pub fn parse_moment(input: &str) -> Result<ParsedMoment> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateError::invalid_input(input, "empty date string"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(ParsedMoment::Aware(dt));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(ParsedMoment::Aware(dt));
    }

    for format in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(ParsedMoment::Aware(dt));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ParsedMoment::Naive(ndt));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(ParsedMoment::Naive(ndt));
        }
    }

    tracing::warn!("Rejected unparseable date string: {:?}", input);
    Err(DateError::invalid_input(
        input,
        "not a recognised date or date-time",
    ))
}

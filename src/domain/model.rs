use crate::utils::error::{DateError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Monday and Sunday bounding a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Renders both ends with a strftime pattern. Fails when the pattern asks
    /// for a time of day or an offset.
    pub fn format(&self, pattern: &str) -> Result<(String, String)> {
        Ok((render(self.start, pattern)?, render(self.end, pattern)?))
    }
}

fn render(date: NaiveDate, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| DateError::InvalidConfigValueError {
        field: "output.week_format".to_string(),
        value: pattern.to_string(),
        reason: "Pattern cannot be rendered from a calendar date".to_string(),
    })?;
    Ok(out)
}

impl fmt::Display for WeekBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.start.format(ISO_DATE_FORMAT),
            self.end.format(ISO_DATE_FORMAT)
        )
    }
}

/// What to do with a day or month component outside its calendar range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOverflow {
    /// `31/04/2024` becomes `2024-05-01`, `0/03/2024` becomes `2024-02-29`.
    #[default]
    Rollover,
    Reject,
}

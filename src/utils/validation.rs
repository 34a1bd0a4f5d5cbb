use crate::utils::error::{DateError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate};
use std::fmt::Write;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(DateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_strftime_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Invalid strftime pattern".to_string(),
        });
    }
    Ok(())
}

/// A strftime pattern that renders from a calendar date alone, without time
/// of day or offset specifiers.
pub fn validate_date_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_strftime_pattern(field_name, pattern)?;

    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDate::default().format(pattern)).is_err() {
        return Err(DateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern needs a time of day or offset; only date specifiers are allowed"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_rfc3339(field_name: &str, value: &str) -> Result<()> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|e| DateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected an RFC 3339 timestamp: {}", e),
        })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| DateError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Missing required value".to_string(),
        })
}

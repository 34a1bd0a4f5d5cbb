use crate::adapters::clock::{FixedClock, SystemClock, UtcClock};
use crate::domain::model::{DayOverflow, ISO_DATE_FORMAT};
use crate::domain::ports::Clock;
use crate::utils::error::{DateError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const CLOCK_SOURCES: [&str; 3] = ["local", "utc", "fixed"];
const OVERFLOW_POLICIES: [&str; 2] = ["rollover", "reject"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatesConfig {
    pub calendar: Option<CalendarConfig>,
    pub clock: Option<ClockConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub overflow: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    pub source: Option<String>,
    pub fixed_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub week_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl DatesConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(overflow) = self.calendar.as_ref().and_then(|c| c.overflow.as_deref()) {
            validation::validate_one_of("calendar.overflow", overflow, &OVERFLOW_POLICIES)?;
        }

        validation::validate_one_of("clock.source", self.clock_source(), &CLOCK_SOURCES)?;
        if self.clock_source() == "fixed" {
            let fixed_at = self.clock.as_ref().and_then(|c| c.fixed_at.as_ref());
            let fixed_at = validation::validate_required_field("clock.fixed_at", &fixed_at)?;
            validation::validate_rfc3339("clock.fixed_at", fixed_at)?;
        }

        validation::validate_date_pattern("output.week_format", self.week_format())?;
        validation::validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;

        Ok(())
    }

    pub fn overflow(&self) -> DayOverflow {
        match self.calendar.as_ref().and_then(|c| c.overflow.as_deref()) {
            Some("reject") => DayOverflow::Reject,
            _ => DayOverflow::Rollover,
        }
    }

    pub fn clock_source(&self) -> &str {
        self.clock
            .as_ref()
            .and_then(|c| c.source.as_deref())
            .unwrap_or("local")
    }

    pub fn week_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.week_format.as_deref())
            .unwrap_or(ISO_DATE_FORMAT)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn set_overflow(&mut self, overflow: DayOverflow) {
        let value = match overflow {
            DayOverflow::Rollover => "rollover",
            DayOverflow::Reject => "reject",
        };
        self.calendar.get_or_insert_with(Default::default).overflow = Some(value.to_string());
    }

    /// Pins the clock to an RFC 3339 moment.
    pub fn set_fixed_clock(&mut self, at: &str) {
        let clock = self.clock.get_or_insert_with(Default::default);
        clock.source = Some("fixed".to_string());
        clock.fixed_at = Some(at.to_string());
    }

    pub fn build_clock(&self) -> Result<Box<dyn Clock>> {
        match self.clock_source() {
            "local" => Ok(Box::new(SystemClock)),
            "utc" => Ok(Box::new(UtcClock)),
            "fixed" => {
                let fixed_at = self.clock.as_ref().and_then(|c| c.fixed_at.as_ref());
                let fixed_at = validation::validate_required_field("clock.fixed_at", &fixed_at)?;
                Ok(Box::new(FixedClock::from_rfc3339(fixed_at)?))
            }
            other => Err(DateError::InvalidConfigValueError {
                field: "clock.source".to_string(),
                value: other.to_string(),
                reason: format!("Valid values: {}", CLOCK_SOURCES.join(", ")),
            }),
        }
    }
}

impl Validate for DatesConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

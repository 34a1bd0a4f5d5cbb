use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("Invalid date input '{input}': {reason}")]
    InvalidDateInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DateError {
    pub fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        DateError::InvalidDateInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DateError::InvalidDateInput { .. } => ErrorCategory::Input,
            DateError::ConfigError { .. }
            | DateError::ConfigValidationError { .. }
            | DateError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DateError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DateError::InvalidDateInput { .. } => {
                "Use day/month/year (e.g. 05/03/2021) for picker dates or YYYY-MM-DD[THH:MM:SS] for ISO dates"
                    .to_string()
            }
            DateError::IoError(_) => "Check that the file exists and is readable".to_string(),
            DateError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            DateError::ConfigValidationError { field, .. }
            | DateError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DateError::InvalidDateInput { input, .. } => {
                format!("'{}' is not a valid date", input)
            }
            DateError::IoError(e) => format!("Could not read file: {}", e),
            DateError::ConfigError { message } => format!("Bad configuration: {}", message),
            DateError::ConfigValidationError { field, message } => {
                format!("Bad configuration for {}: {}", field, message)
            }
            DateError::InvalidConfigValueError { field, value, reason } => {
                format!("Bad value '{}' for {}: {}", value, field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;

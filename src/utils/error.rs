use thiserror::Error;

/// Errors produced by the pure calculation functions in [`crate::core`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Skein yardage cannot be zero")]
    DivisionByZero,

    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: String, to: String },
}

impl CalcError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum YarnError {
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calculation,
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

impl YarnError {
    pub fn invalid_field(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        YarnError::InvalidFieldValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            YarnError::Calculation(_) => ErrorCategory::Calculation,
            YarnError::InvalidFieldValue { .. } | YarnError::MissingField { .. } => {
                ErrorCategory::Input
            }
            YarnError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            YarnError::IoError(_) | YarnError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            YarnError::InvalidFieldValue { .. } | YarnError::MissingField { .. } => {
                ErrorSeverity::Medium
            }
            YarnError::Calculation(_) | YarnError::ConfigValidationError { .. } => {
                ErrorSeverity::High
            }
            YarnError::IoError(_) | YarnError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            YarnError::Calculation(CalcError::InvalidInput { message }) => message.clone(),
            YarnError::Calculation(CalcError::DivisionByZero) => {
                "Skein yardage cannot be zero".to_string()
            }
            YarnError::Calculation(CalcError::UnsupportedConversion { from, to }) => {
                format!("Cannot convert from {} to {}", from, to)
            }
            YarnError::InvalidFieldValue { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            YarnError::MissingField { field } => format!("{} is required", field),
            YarnError::ConfigValidationError { field, message } => {
                format!("Plan file problem in {}: {}", field, message)
            }
            YarnError::IoError(e) => format!("Could not read or write a file: {}", e),
            YarnError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            YarnError::Calculation(CalcError::InvalidInput { .. }) => {
                "Use non-negative yardage and price values and gauges greater than 0"
            }
            YarnError::Calculation(CalcError::DivisionByZero) => {
                "Enter the yardage printed on the substitute yarn's ball band"
            }
            YarnError::Calculation(CalcError::UnsupportedConversion { .. }) => {
                "Supported conversions are yards <-> meters and inches <-> cm"
            }
            YarnError::InvalidFieldValue { .. } => {
                "Enter plain decimal numbers such as 1200 or 9.50 (no signs or units)"
            }
            YarnError::MissingField { .. } => {
                "Provide the value on the command line or in the plan file"
            }
            YarnError::ConfigValidationError { .. } => {
                "Check the plan file is valid TOML with [pattern] and [substitute] tables"
            }
            YarnError::IoError(_) => "Check the file path and its permissions",
            YarnError::SerializationError(_) => "Retry without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, YarnError>;

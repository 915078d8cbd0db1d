//! Custom error types for spendlens
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.
//!
//! Two variants carry the engine's own failure modes: `MalformedDate` (a date
//! that does not match the caller-configured format during monthly
//! aggregation) and `MissingField` (a precondition violation such as an
//! unclassified record handed to the category aggregator). Everything else
//! wraps I/O and serialization failures from the surrounding layers. Division
//! guards in the engine substitute zero and never surface here.

use thiserror::Error;

/// The main error type for spendlens operations
#[derive(Error, Debug)]
pub enum SpendlensError {
    /// A date string that does not match the configured format
    #[error("Malformed date '{value}': expected format '{format}'")]
    MalformedDate { value: String, format: String },

    /// A record lacks a field required by the requested operation
    #[error("Transaction is missing required field: {0}")]
    MissingField(&'static str),

    /// Rules configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Statement loading errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report/record writing errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl SpendlensError {
    /// Create a malformed-date error
    pub fn malformed_date(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
            format: format.into(),
        }
    }

    /// Check if this is a malformed-date error
    pub fn is_malformed_date(&self) -> bool {
        matches!(self, Self::MalformedDate { .. })
    }

    /// Check if this is a missing-field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SpendlensError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SpendlensError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for spendlens operations
pub type SpendlensResult<T> = Result<T, SpendlensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_display() {
        let err = SpendlensError::malformed_date("32.13.2024", "%d.%m.%Y");
        assert_eq!(
            err.to_string(),
            "Malformed date '32.13.2024': expected format '%d.%m.%Y'"
        );
        assert!(err.is_malformed_date());
    }

    #[test]
    fn test_missing_field_display() {
        let err = SpendlensError::MissingField("category");
        assert_eq!(
            err.to_string(),
            "Transaction is missing required field: category"
        );
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlensError = io_err.into();
        assert!(matches!(err, SpendlensError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{not valid").unwrap_err();
        let err: SpendlensError = yaml_err.into();
        assert!(matches!(err, SpendlensError::Yaml(_)));
    }
}

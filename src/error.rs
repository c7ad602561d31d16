//! Error types and handling for `segwind`

use thiserror::Error;

/// Main error type for the `segwind` library
#[derive(Error, Debug)]
pub enum SegwindError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors raised at the dataset boundary
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The requested forecast day is not present in the dataset
    #[error("Unknown forecast day '{day}' (available: {available})")]
    UnknownDay { day: String, available: String },

    /// Malformed segment JSON
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SegwindError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unknown-day error listing the days that do exist
    pub fn unknown_day<S: Into<String>>(day: S, available: &[&str]) -> Self {
        Self::UnknownDay {
            day: day.into(),
            available: if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            },
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SegwindError::Config { .. } => {
                "Configuration error. Please check your config file and SEGWIND__ variables."
                    .to_string()
            }
            SegwindError::Validation { message } => format!("Invalid input: {message}"),
            SegwindError::UnknownDay { day, available } => {
                format!("No forecast for '{day}'. Pick one of: {available}")
            }
            SegwindError::Parse { .. } => {
                "Segment data is not valid JSON. Expected an array of segment objects.".to_string()
            }
            SegwindError::Io { .. } => {
                "File operation failed. Please check the input path and permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SegwindError::config("bad log level");
        assert!(matches!(config_err, SegwindError::Config { .. }));

        let validation_err = SegwindError::validation("speed is negative");
        assert!(matches!(validation_err, SegwindError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SegwindError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = SegwindError::validation("segment 7: bearing is NaN");
        assert!(validation_err.user_message().contains("segment 7"));

        let day_err = SegwindError::unknown_day("2024-01-09", &["2024-01-01", "2024-01-02"]);
        assert!(day_err.user_message().contains("2024-01-01, 2024-01-02"));
        assert!(day_err.to_string().contains("2024-01-09"));
    }

    #[test]
    fn test_unknown_day_without_days() {
        let err = SegwindError::unknown_day("monday", &[]);
        assert!(err.to_string().contains("available: none"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SegwindError = io_err.into();
        assert!(matches!(err, SegwindError::Io { .. }));
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: SegwindError = json_err.into();
        assert!(matches!(err, SegwindError::Parse { .. }));
    }
}

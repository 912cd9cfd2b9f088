//! Error types for STAF conversion
//!
//! All fallible operations in the crate return [`Result`], which wraps
//! [`StafError`]. Each variant carries a stable machine-readable code
//! (see [`StafError::code`]) alongside its human-readable message, so
//! callers can branch on the failure class without string matching.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StafError>;

#[derive(Error, Debug)]
pub enum StafError {
    /// The input is missing one or more of the mandatory STAF sections
    /// (SHIP, SECTION, STACK, TIER) and cannot be treated as a STAF file.
    #[error("This file doesn't seem to be a valid STAF file")]
    NotStafFile {
        /// Names of the mandatory sections that were not found.
        missing: Vec<String>,
    },

    /// Reading the input or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The converted document could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration or command-line arguments.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StafError {
    /// Create a `NotStafFile` error listing the missing mandatory sections.
    pub fn not_staf_file(missing: Vec<String>) -> Self {
        StafError::NotStafFile { missing }
    }

    /// Create a configuration error with a descriptive message.
    pub fn configuration(message: impl Into<String>) -> Self {
        StafError::Configuration {
            message: message.into(),
        }
    }

    /// Stable machine-readable code identifying the failure class.
    pub fn code(&self) -> &'static str {
        match self {
            StafError::NotStafFile { .. } => "NotStafFile",
            StafError::Io(_) => "Io",
            StafError::Serialization(_) => "Serialization",
            StafError::Configuration { .. } => "Configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_staf_file_message_is_stable() {
        let err = StafError::not_staf_file(vec!["TIER".to_string()]);
        assert_eq!(err.to_string(), "This file doesn't seem to be a valid STAF file");
        assert_eq!(err.code(), "NotStafFile");
    }

    #[test]
    fn test_not_staf_file_carries_missing_sections() {
        let err = StafError::not_staf_file(vec!["SHIP".to_string(), "STACK".to_string()]);
        match err {
            StafError::NotStafFile { missing } => {
                assert_eq!(missing, vec!["SHIP".to_string(), "STACK".to_string()]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_configuration_error_message() {
        let err = StafError::configuration("lpp must be positive");
        assert_eq!(err.to_string(), "Configuration error: lpp must be positive");
        assert_eq!(err.code(), "Configuration");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: StafError = io.into();
        assert!(err.to_string().contains("no such file"));
        assert_eq!(err.code(), "Io");
    }
}

//! Custom error types for the Fleetwatch simulator.
//!
//! Provides a structured error hierarchy for better error handling
//! and more informative error messages.

use std::path::PathBuf;

/// The main error type for Fleetwatch operations.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// I/O error (report write, terminal, etc.)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument combination
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for external library errors
    #[error("{context}: {message}")]
    External { context: String, message: String },
}

/// Result type alias using FleetError
pub type FleetResult<T> = Result<T, FleetError>;

impl FleetError {
    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an external error with context
    pub fn external(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::External {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Convert from raw I/O errors (without path context)
impl From<std::io::Error> for FleetError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = FleetError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            Some(PathBuf::from("/test/path")),
        );
        assert!(err.to_string().contains("/test/path"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = FleetError::InvalidArgument("--devices must be at least 1".to_string());
        assert!(err.to_string().contains("--devices"));
    }

    #[test]
    fn test_error_boxes_into_dyn_error() {
        // The binary's main returns this boxed error type
        fn fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err(FleetError::InvalidArgument("--devices must be at least 1".to_string()).into())
        }
        let err = fails().unwrap_err();
        assert!(err.to_string().contains("--devices"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fleet_err: FleetError = io_err.into();
        assert!(matches!(fleet_err, FleetError::Io { .. }));
    }
}

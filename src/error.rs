//! Centralized error handling for freakyfetch

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for freakyfetch operations
#[derive(Debug, Error)]
pub enum FreakyfetchError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// A config, cache or template file does not exist
    #[error("Missing resource: {}", path.display())]
    MissingResource { path: PathBuf },

    /// A bounded field would have overflowed
    #[error("Value for {field} exceeds {capacity} bytes")]
    CapacityExceeded { field: &'static str, capacity: usize },

    /// The image display backend could not render
    #[error("Image backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Even the generic template could not be found
    #[error("No ascii template found, generic template '{name}' is missing too")]
    RepeatedFallbackFailure { name: String },
}

impl FreakyfetchError {
    pub fn detection(message: impl Into<String>) -> Self {
        FreakyfetchError::Detection(message.into())
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        FreakyfetchError::MissingResource { path: path.into() }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        FreakyfetchError::BackendUnavailable(message.into())
    }
}

/// Type alias for Results in freakyfetch
pub type Result<T> = std::result::Result<T, FreakyfetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FreakyfetchError::RepeatedFallbackFailure {
            name: "unknown".to_string(),
        };
        assert!(err.to_string().contains("unknown"));

        let err = FreakyfetchError::CapacityExceeded {
            field: "kernel",
            capacity: 256,
        };
        assert_eq!(err.to_string(), "Value for kernel exceeds 256 bytes");
    }

    #[test]
    fn test_error_creation_helpers() {
        let err = FreakyfetchError::missing("/tmp/nope");
        assert!(matches!(err, FreakyfetchError::MissingResource { ref path } if path.ends_with("nope")));

        let err: FreakyfetchError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, FreakyfetchError::Io(_)));
    }
}

//! Error types for repkit.

use thiserror::Error;

/// All errors that can occur in repkit.
#[derive(Debug, Error)]
pub enum RepkitError {
    /// Configuration file or value problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local database problem.
    #[error("Database error: {0}")]
    Database(String),

    /// Failed to parse or serialize data.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem problem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A workout that cannot be played (e.g. no exercises).
    #[error("Invalid workout: {0}")]
    InvalidWorkout(String),

    /// The meal analysis call failed in a way that has no fallback.
    #[error("Nutrition analysis error: {0}")]
    Nutrition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepkitError::InvalidWorkout("workout has no exercises".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid workout: workout has no exercises"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RepkitError = io_err.into();
        assert!(matches!(err, RepkitError::Io(_)));
    }
}

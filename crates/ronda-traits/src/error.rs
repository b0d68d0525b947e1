//! Error types for the Ronda framework.
//!
//! This module defines the error taxonomy used throughout the Ronda
//! ecosystem. Data-availability and input-validity failures are raised to
//! the caller immediately; the engine never returns a partially computed
//! result.

use thiserror::Error;

/// The main error type for Ronda operations.
///
/// This enum encompasses all error cases that can occur when deriving a
/// valuation from quarterly financial history.
#[derive(Debug, Error)]
pub enum RondaError {
    /// No financial history is available for the requested company.
    #[error("Financial history not found: {0}")]
    NotFound(String),

    /// Fewer usable quarterly records than the engine requires.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Malformed valuation input (parameters or records).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
///
/// This is a convenience type that uses [`RondaError`] as the error type.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::NotFound("600519".to_string());
        assert_eq!(err.to_string(), "Financial history not found: 600519");

        let err = RondaError::InsufficientData("need 4 quarters".to_string());
        assert_eq!(err.to_string(), "Insufficient data: need 4 quarters");
    }

    #[test]
    fn test_error_from_str() {
        let err: RondaError = "something odd".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<f64> = Ok(1.35);
        assert!(ok_result.is_ok());

        let err_result: Result<f64> = Err(RondaError::InvalidInput("shares".to_string()));
        assert!(err_result.is_err());
    }
}

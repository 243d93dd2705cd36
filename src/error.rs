//! Error handling module
//!
//! Application-level error type for the binary and other outer callers.

use crate::config::ConfigError;
use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Business rule failures
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Domain failures are reported to the user; anything else aborts the run
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StateError, ValidationError};

    #[test]
    fn test_domain_error_message_passes_through() {
        let err: AppError = DomainError::from(StateError::ReservationCancelled).into();

        assert!(err.is_domain_error());
        assert_eq!(err.to_string(), "Reservation is cancelled");
    }

    #[test]
    fn test_config_error_is_not_domain() {
        let err: AppError = ConfigError::InvalidValue("LOG_FORMAT").into();

        assert!(!err.is_domain_error());
        assert!(err.to_string().contains("LOG_FORMAT"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AppError = DomainError::from(ValidationError::EmptyGuestList).into();
        assert_eq!(err.to_string(), "Guest list is empty");
    }
}

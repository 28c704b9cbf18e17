//! # Error Module
//!
//! Domain errors for the teller client, using thiserror.
//!
//! Validation variants double as the user-facing messages shown when a
//! flow settles without issuing a request.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Validation errors ===
    #[error("PIN must be exactly 4 digits")]
    InvalidPin,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Account number must be at least 4 digits")]
    InvalidAccountNumber,

    #[error("Initial balance must not be negative")]
    NegativeInitialBalance,

    #[error("{0} is required")]
    MissingField(&'static str),

    // === Contract errors ===
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    #[error("Session is malformed: {0}")]
    MalformedSession(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this error is a local validation failure (input can be
    /// corrected and resubmitted without any server round trip).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidPin
                | CoreError::InvalidAmount
                | CoreError::InvalidAccountNumber
                | CoreError::NegativeInitialBalance
                | CoreError::MissingField(_)
        )
    }

    /// Whether this error indicates a client/server contract violation.
    /// These are fatal - never masked behind a default behavior.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownRole(_)
                | CoreError::InvalidAccountType(_)
                | CoreError::MalformedSession(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CoreError::InvalidPin.to_string(),
            "PIN must be exactly 4 digits"
        );
        assert_eq!(
            CoreError::MissingField("username").to_string(),
            "username is required"
        );
        assert_eq!(
            CoreError::UnknownRole("admin".to_string()).to_string(),
            "Unknown role: admin"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(CoreError::InvalidAmount.is_validation());
        assert!(CoreError::MissingField("name").is_validation());
        assert!(!CoreError::UnknownRole("x".to_string()).is_validation());

        assert!(CoreError::UnknownRole("x".to_string()).is_contract_violation());
        assert!(!CoreError::InvalidPin.is_contract_violation());
    }
}

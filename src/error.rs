//! Custom error types for budget-ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for amounts and names
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Insufficient funds
    #[error("Insufficient funds in category '{category}': need {needed:.2}, have {available:.2}")]
    InsufficientFunds {
        category: String,
        needed: f64,
        available: f64,
    },

    /// The spend chart needs at least one successful withdrawal
    #[error("Cannot chart spending: no withdrawals have been recorded")]
    NoWithdrawals,

    /// The spend chart needs at least one category
    #[error("Cannot chart spending: no categories given")]
    EmptyChart,

    /// Scenario file errors
    #[error("Scenario error: {0}")]
    Scenario(String),
}

impl LedgerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::category_not_found("Food");
        assert_eq!(err.to_string(), "Category not found: Food");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = LedgerError::InsufficientFunds {
            category: "Groceries".into(),
            needed: 50.0,
            available: 30.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds in category 'Groceries': need 50.00, have 30.50"
        );
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_chart_errors() {
        assert_eq!(
            LedgerError::NoWithdrawals.to_string(),
            "Cannot chart spending: no withdrawals have been recorded"
        );
        assert!(!LedgerError::EmptyChart.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}

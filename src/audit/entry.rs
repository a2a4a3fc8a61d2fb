//! Audit entry data structures
//!
//! Defines the ledger operations that can be audited and the entry format
//! itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::amount::format_amount;
use crate::models::Category;

/// Types of ledger operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdraw,
    Transfer,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Operation::Deposit => "DEPOSIT",
            Operation::Withdraw => "WITHDRAW",
            Operation::Transfer => "TRANSFER",
        })
    }
}

/// A single audit log entry
///
/// Records one operation on a category, whether it went through, and a
/// snapshot of the category afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the category the operation was applied to
    pub category: String,

    /// Amount requested
    pub amount: f64,

    /// Ledger description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Receiving category of a transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterpart: Option<String>,

    /// Whether the operation was applied
    pub succeeded: bool,

    /// JSON snapshot of the category after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, category: &Category, amount: f64, succeeded: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            category: category.name().to_string(),
            amount,
            description: String::new(),
            counterpart: None,
            succeeded,
            after: snapshot(category),
        }
    }

    /// Create an entry for a deposit
    pub fn deposit(category: &Category, amount: f64, description: impl Into<String>) -> Self {
        let mut entry = Self::new(Operation::Deposit, category, amount, true);
        entry.description = description.into();
        entry
    }

    /// Create an entry for a withdrawal attempt
    pub fn withdraw(
        category: &Category,
        amount: f64,
        description: impl Into<String>,
        succeeded: bool,
    ) -> Self {
        let mut entry = Self::new(Operation::Withdraw, category, amount, succeeded);
        entry.description = description.into();
        entry
    }

    /// Create an entry for a transfer attempt, recorded against the source
    pub fn transfer(source: &Category, target: &Category, amount: f64, succeeded: bool) -> Self {
        let mut entry = Self::new(Operation::Transfer, source, amount, succeeded);
        entry.counterpart = Some(target.name().to_string());
        entry
    }
}

fn snapshot(category: &Category) -> Option<serde_json::Value> {
    match serde_json::to_value(category) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("audit snapshot of '{}' skipped: {}", category.name(), e);
            None
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<8} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.category,
            format_amount(self.amount)
        )?;
        if let Some(counterpart) = &self.counterpart {
            write!(f, " -> {}", counterpart)?;
        }
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        if !self.succeeded {
            write!(f, " [rejected]")?;
        }
        Ok(())
    }
}

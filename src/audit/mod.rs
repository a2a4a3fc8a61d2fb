//! Audit logging system for budget-ledger
//!
//! Records every deposit, withdrawal, and transfer attempt, with a snapshot
//! of the affected category, in an append-only audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let ok = food.withdraw(105.55, "groceries");
//! logger.log(&AuditEntry::withdraw(&food, 105.55, "groceries", ok))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

//! Core data models for budget-ledger
//!
//! This module contains the data structures that represent the budgeting
//! domain: categories, their ledgers, and the shared withdrawal total.

pub mod amount;
pub mod category;
pub mod totals;

pub use category::{Category, LedgerEntry};
pub use totals::WithdrawalTotal;

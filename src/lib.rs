//! budget-ledger - category budgeting ledger with a text spend chart
//!
//! This library models named spending categories that track a balance and an
//! ordered transaction ledger, support deposits, withdrawals, and transfers,
//! and can be summarized as a bar chart of each category's share of total
//! spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Categories, ledger entries, and the shared withdrawal total
//! - `reports`: The spend chart
//! - `display`: Ledger report and summary formatting
//! - `services`: Scenario files and the runner that plays them
//! - `audit`: Audit logging of ledger operations
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `budget` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budget_ledger::models::{Category, WithdrawalTotal};
//! use budget_ledger::reports::create_spend_chart;
//!
//! let totals = WithdrawalTotal::new();
//! let mut food = Category::new("Food", &totals);
//! let mut clothing = Category::new("Clothing", &totals);
//!
//! food.deposit(900.0, "deposit");
//! clothing.deposit(900.0, "deposit");
//! assert!(food.withdraw(105.55, "groceries"));
//! assert!(clothing.withdraw(100.0, "shirt"));
//! assert!(!clothing.withdraw(1000.0, "car"));
//!
//! let chart = create_spend_chart(&[&food, &clothing], totals.get())?;
//! assert!(chart.starts_with("Percentage spent by category\n100|"));
//! # Ok::<(), budget_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{LedgerError, LedgerResult};

//! Display formatting for terminal output
//!
//! Provides the fixed-width ledger report and the category summary table.

pub mod ledger;
pub mod report;
pub mod summary;

pub use ledger::format_ledger_report;
pub use summary::format_category_summary;

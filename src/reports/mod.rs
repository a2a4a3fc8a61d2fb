//! Reports module for budget-ledger
//!
//! Provides the spend chart: each category's share of total withdrawals as
//! a vertical text bar chart.

pub mod spend_chart;

pub use spend_chart::{create_spend_chart, spend_bucket, ChartCell, ChartGrid, Spending};

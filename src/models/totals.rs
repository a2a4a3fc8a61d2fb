//! Shared withdrawal aggregate
//!
//! Every category bound to the same [`WithdrawalTotal`] adds its successful
//! withdrawals to it. The handle is cheap to clone; clones observe the same
//! running total.

use std::cell::Cell;
use std::rc::Rc;

/// Running total of all successful withdrawals across a set of categories
///
/// Starts at zero and only ever increases. Independent totals give
/// independent budgets, which keeps tests isolated from each other.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalTotal(Rc<Cell<f64>>);

impl WithdrawalTotal {
    /// Create a new total starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current total of all withdrawals recorded through this handle
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Check whether two handles share the same running total
    pub fn is_shared_with(&self, other: &WithdrawalTotal) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Add a successful withdrawal to the total
    pub(crate) fn record(&self, amount: f64) {
        self.0.set(self.0.get() + amount);
    }
}

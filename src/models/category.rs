//! Category and ledger entry models
//!
//! A category is a named budget bucket. It owns its balance, the running
//! total of what has been withdrawn from it, and an append-only ledger of
//! every deposit and withdrawal in the order they happened.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::amount::is_withdrawable;
use super::totals::WithdrawalTotal;
use crate::error::{LedgerError, LedgerResult};

/// A single ledger line
///
/// Deposits carry positive amounts, withdrawals and transfer outflows carry
/// negative amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Signed amount of the transaction
    pub amount: f64,

    /// Free-form description, may be empty
    pub description: String,
}

impl LedgerEntry {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

/// A budget category
///
/// The category is bound to a [`WithdrawalTotal`] at construction; every
/// successful withdrawal (including the outgoing leg of a transfer) is added
/// to both the category's own `amount_withdrawn` and that shared total.
#[derive(Debug, Serialize)]
pub struct Category {
    name: String,
    balance: f64,
    amount_withdrawn: f64,
    ledger: Vec<LedgerEntry>,
    #[serde(skip)]
    totals: WithdrawalTotal,
}

impl Category {
    /// Create an empty category bound to a withdrawal total
    pub fn new(name: impl Into<String>, totals: &WithdrawalTotal) -> Self {
        Self {
            name: name.into(),
            balance: 0.0,
            amount_withdrawn: 0.0,
            ledger: Vec::new(),
            totals: totals.clone(),
        }
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Cumulative total of successful withdrawals from this category
    pub fn amount_withdrawn(&self) -> f64 {
        self.amount_withdrawn
    }

    /// Ledger entries in insertion order
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// The withdrawal total this category reports into
    pub fn totals(&self) -> &WithdrawalTotal {
        &self.totals
    }

    /// Deposit money into the category
    ///
    /// Deposits are not validated. A negative deposit lowers the balance
    /// without counting as a withdrawal, so it never shows up in the spend
    /// chart.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        self.record_deposit(amount, description.into());
    }

    /// Check whether `amount` can be taken out of the category
    ///
    /// Only an amount strictly greater than the balance is refused, so
    /// withdrawing the entire balance is allowed.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount.partial_cmp(&self.balance) != Some(Ordering::Greater)
    }

    /// Withdraw money, reporting why the withdrawal was refused
    ///
    /// Nothing is mutated on error.
    pub fn try_withdraw(&mut self, amount: f64, description: impl Into<String>) -> LedgerResult<()> {
        self.ensure_withdrawable(amount)?;
        self.record_withdrawal(amount, description.into());
        Ok(())
    }

    /// Withdraw money from the category
    ///
    /// Returns `false` and leaves the category untouched when the amount is
    /// not a positive number or exceeds the balance.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        match self.try_withdraw(amount, description) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("withdrawal from '{}' rejected: {}", self.name, e);
                false
            }
        }
    }

    /// Transfer money to another category, reporting why it was refused
    ///
    /// Funds are checked once, then both ledgers are updated. The outgoing
    /// leg counts as a withdrawal; the incoming leg is a plain deposit.
    pub fn try_transfer(&mut self, amount: f64, target: &mut Category) -> LedgerResult<()> {
        self.ensure_withdrawable(amount)?;

        self.record_withdrawal(amount, format!("Transfer to {}", target.name));
        target.record_deposit(amount, format!("Transfer from {}", self.name));
        Ok(())
    }

    /// Transfer money to another category
    ///
    /// Returns `false` with no mutation on either side when the transfer is
    /// refused.
    pub fn transfer(&mut self, amount: f64, target: &mut Category) -> bool {
        match self.try_transfer(amount, target) {
            Ok(()) => true,
            Err(e) => {
                log::debug!(
                    "transfer from '{}' to '{}' rejected: {}",
                    self.name,
                    target.name,
                    e
                );
                false
            }
        }
    }

    fn ensure_withdrawable(&self, amount: f64) -> LedgerResult<()> {
        if !is_withdrawable(amount) {
            return Err(LedgerError::Validation(format!(
                "Withdrawal amount must be a positive number, got {}",
                amount
            )));
        }

        if !self.check_funds(amount) {
            return Err(LedgerError::InsufficientFunds {
                category: self.name.clone(),
                needed: amount,
                available: self.balance,
            });
        }

        Ok(())
    }

    fn record_deposit(&mut self, amount: f64, description: String) {
        self.balance += amount;
        self.ledger.push(LedgerEntry::new(amount, description));
    }

    fn record_withdrawal(&mut self, amount: f64, description: String) {
        self.balance -= amount;
        self.amount_withdrawn += amount;
        self.totals.record(amount);
        self.ledger.push(LedgerEntry::new(-amount, description));
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::display::ledger::format_ledger_report(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_sum(category: &Category) -> f64 {
        category.ledger().iter().map(|e| e.amount).sum()
    }

    #[test]
    fn test_new_category() {
        let totals = WithdrawalTotal::new();
        let category = Category::new("Food", &totals);

        assert_eq!(category.name(), "Food");
        assert_eq!(category.balance(), 0.0);
        assert_eq!(category.amount_withdrawn(), 0.0);
        assert!(category.ledger().is_empty());
        assert!(category.totals().is_shared_with(&totals));
    }

    #[test]
    fn test_deposit() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);

        food.deposit(900.0, "deposit");

        assert_eq!(food.balance(), 900.0);
        assert_eq!(food.ledger(), &[LedgerEntry::new(900.0, "deposit")]);
        assert_eq!(totals.get(), 0.0);
    }

    #[test]
    fn test_deposit_without_description() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);

        food.deposit(45.56, "");

        assert_eq!(food.ledger()[0].description, "");
    }

    #[test]
    fn test_negative_deposit_is_not_a_withdrawal() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);

        food.deposit(100.0, "");
        food.deposit(-30.0, "correction");

        assert_eq!(food.balance(), 70.0);
        assert_eq!(food.amount_withdrawn(), 0.0);
        assert_eq!(totals.get(), 0.0);
        assert_eq!(food.ledger().len(), 2);
    }

    #[test]
    fn test_withdraw() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(900.0, "deposit");

        assert!(food.withdraw(45.67, "milk, cereal, eggs, bacon, bread"));

        assert_eq!(food.balance(), 900.0 - 45.67);
        assert_eq!(food.amount_withdrawn(), 45.67);
        assert_eq!(totals.get(), 45.67);
        assert_eq!(
            food.ledger()[1],
            LedgerEntry::new(-45.67, "milk, cereal, eggs, bacon, bread")
        );
    }

    #[test]
    fn test_withdraw_insufficient_funds_mutates_nothing() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(100.0, "deposit");

        assert!(!food.withdraw(100.10, "too much"));

        assert_eq!(food.balance(), 100.0);
        assert_eq!(food.amount_withdrawn(), 0.0);
        assert_eq!(totals.get(), 0.0);
        assert_eq!(food.ledger().len(), 1);
    }

    #[test]
    fn test_try_withdraw_reports_reason() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(10.0, "");

        let err = food.try_withdraw(20.0, "").unwrap_err();
        assert!(err.is_insufficient_funds());

        let err = food.try_withdraw(-5.0, "").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(food.balance(), 10.0);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(50.0, "");

        assert!(food.withdraw(50.0, "everything"));
        assert_eq!(food.balance(), 0.0);
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(50.0, "");

        assert!(!food.withdraw(0.0, ""));
        assert!(!food.withdraw(-10.0, ""));
        assert!(!food.withdraw(f64::NAN, ""));
        assert_eq!(food.ledger().len(), 1);
        assert_eq!(food.amount_withdrawn(), 0.0);
    }

    #[test]
    fn test_check_funds() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(10.0, "deposit");

        assert!(!food.check_funds(20.0));
        assert!(food.check_funds(10.0));
        assert!(food.check_funds(9.99));
    }

    #[test]
    fn test_check_funds_refuses_only_greater_amounts() {
        let totals = WithdrawalTotal::new();
        let mut unknown = Category::new("Unknown", &totals);
        unknown.deposit(f64::NAN, "");

        assert!(unknown.check_funds(5.0));
        assert!(unknown.check_funds(f64::NAN));

        let mut food = Category::new("Food", &totals);
        food.deposit(10.0, "");
        assert!(food.check_funds(f64::NAN));
        assert!(!food.check_funds(f64::INFINITY));
    }

    #[test]
    fn test_transfer() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        let mut entertainment = Category::new("Entertainment", &totals);
        food.deposit(900.0, "deposit");
        food.withdraw(45.67, "milk, cereal, eggs, bacon, bread");

        assert!(food.transfer(20.0, &mut entertainment));

        assert_eq!(food.balance(), 900.0 - 45.67 - 20.0);
        assert_eq!(entertainment.balance(), 20.0);
        assert_eq!(food.amount_withdrawn(), 45.67 + 20.0);
        assert_eq!(entertainment.amount_withdrawn(), 0.0);
        assert_eq!(totals.get(), 45.67 + 20.0);
        assert_eq!(
            food.ledger().last(),
            Some(&LedgerEntry::new(-20.0, "Transfer to Entertainment"))
        );
        assert_eq!(
            entertainment.ledger(),
            &[LedgerEntry::new(20.0, "Transfer from Food")]
        );
    }

    #[test]
    fn test_transfer_insufficient_funds_mutates_nothing() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        let mut business = Category::new("Business", &totals);
        food.deposit(100.0, "deposit");

        assert!(!food.transfer(200.0, &mut business));

        assert_eq!(food.balance(), 100.0);
        assert_eq!(food.ledger().len(), 1);
        assert!(business.ledger().is_empty());
        assert_eq!(business.balance(), 0.0);
        assert_eq!(totals.get(), 0.0);
    }

    #[test]
    fn test_balance_matches_ledger_sum() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        let mut clothing = Category::new("Clothing", &totals);

        food.deposit(900.0, "deposit");
        food.withdraw(105.55, "groceries");
        food.withdraw(1000.0, "rejected");
        food.deposit(-12.3, "adjustment");
        food.transfer(50.25, &mut clothing);
        clothing.withdraw(10.1, "socks");
        clothing.deposit(0.1, "");

        assert_eq!(food.balance(), ledger_sum(&food));
        assert_eq!(clothing.balance(), ledger_sum(&clothing));
        assert_eq!(
            totals.get(),
            food.amount_withdrawn() + clothing.amount_withdrawn()
        );
    }

    #[test]
    fn test_serialization_skips_totals() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        food.deposit(10.0, "deposit");

        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["name"], "Food");
        assert_eq!(json["balance"], 10.0);
        assert_eq!(json["ledger"][0]["description"], "deposit");
        assert!(json.get("totals").is_none());
    }
}

//! Ledger report formatting
//!
//! Renders one category as a fixed-width report: a starred title line, one
//! line per ledger entry, and the closing balance.

use super::report::{left_align, truncate_chars};
use crate::models::amount::{format_amount_field, format_balance};
use crate::models::Category;

/// Width of the title line
pub const REPORT_WIDTH: usize = 30;

/// Width of the description column
pub const DESCRIPTION_WIDTH: usize = 23;

/// Width of the amount column
pub const AMOUNT_WIDTH: usize = REPORT_WIDTH - DESCRIPTION_WIDTH;

/// Format the ledger report for a category
///
/// ```text
/// *************Food*************
/// deposit                 900.00
/// milk, cereal, eggs, bac -45.67
/// Total: 854.33
/// ```
///
/// The total line has no fixed width and there is no trailing newline.
pub fn format_ledger_report(category: &Category) -> String {
    let mut output = format!("{:*^width$}\n", category.name(), width = REPORT_WIDTH);

    for entry in category.ledger() {
        output.push_str(&left_align(
            &truncate_chars(&entry.description, DESCRIPTION_WIDTH),
            DESCRIPTION_WIDTH,
        ));
        output.push_str(&format_amount_field(entry.amount, AMOUNT_WIDTH));
        output.push('\n');
    }

    output.push_str(&format!("Total: {}", format_balance(category.balance())));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WithdrawalTotal;

    #[test]
    fn test_report_layout() {
        let totals = WithdrawalTotal::new();
        let mut food = Category::new("Food", &totals);
        let mut entertainment = Category::new("Entertainment", &totals);
        food.deposit(900.0, "deposit");
        food.withdraw(45.67, "milk, cereal, eggs, bacon, bread");
        food.transfer(20.0, &mut entertainment);

        let expected = "*************Food*************\n\
                        deposit                 900.00\n\
                        milk, cereal, eggs, bac -45.67\n\
                        Transfer to Entertainme -20.00\n\
                        Total: 834.33";
        assert_eq!(format_ledger_report(&food), expected);
        assert_eq!(food.to_string(), expected);
    }

    #[test]
    fn test_report_odd_padding_goes_right() {
        let totals = WithdrawalTotal::new();
        let entertainment = Category::new("Entertainment", &totals);

        assert_eq!(
            format_ledger_report(&entertainment),
            "********Entertainment*********\nTotal: 0.0"
        );
    }

    #[test]
    fn test_report_truncates_wide_amounts() {
        let totals = WithdrawalTotal::new();
        let mut savings = Category::new("Savings", &totals);
        savings.deposit(12345678.9, "");

        let report = format_ledger_report(&savings);
        let line = report.lines().nth(1).unwrap();

        assert_eq!(line, format!("{}1234567", " ".repeat(23)));
        assert_eq!(line.chars().count(), REPORT_WIDTH);
    }

    #[test]
    fn test_report_integral_total() {
        let totals = WithdrawalTotal::new();
        let mut clothing = Category::new("Clothing", &totals);
        clothing.deposit(900.0, "deposit");

        assert!(format_ledger_report(&clothing).ends_with("\nTotal: 900.0"));
    }
}

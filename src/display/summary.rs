//! Category summary formatting
//!
//! A compact table of every category's balance, withdrawals, and share of
//! total spending.

use super::report::{format_percentage, separator};
use crate::models::amount::format_amount;
use crate::models::Category;

/// Format a summary table of categories
pub fn format_category_summary(
    categories: &[Category],
    total_withdrawn: f64,
    currency_symbol: &str,
) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>6}\n",
        "Category",
        "Balance",
        "Withdrawn",
        "Share",
        width = name_width
    ));
    output.push_str(&separator(name_width + 38));
    output.push('\n');

    for category in categories {
        let share = if total_withdrawn > 0.0 {
            format_percentage(category.amount_withdrawn() / total_withdrawn * 100.0)
        } else {
            "-".to_string()
        };

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>6}\n",
            category.name(),
            format!("{}{}", currency_symbol, format_amount(category.balance())),
            format!("{}{}", currency_symbol, format_amount(category.amount_withdrawn())),
            share,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "Total withdrawn: {}{}\n",
        currency_symbol,
        format_amount(total_withdrawn)
    ));

    output
}

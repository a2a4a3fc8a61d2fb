//! Amount formatting and validation
//!
//! Ledger amounts are plain `f64` values. This module holds the rules for
//! turning them into report text and for deciding which amounts a
//! withdrawal may carry.

/// Format an amount with exactly two decimal places
///
/// # Examples
/// ```
/// use budget_ledger::models::amount::format_amount;
/// assert_eq!(format_amount(10.5), "10.50");
/// assert_eq!(format_amount(-105.55), "-105.55");
/// ```
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format an amount for a fixed-width report column
///
/// The two-decimal text is cut to its first `width` characters (a literal
/// cutoff, not rounding) and right-aligned in the field.
pub fn format_amount_field(amount: f64, width: usize) -> String {
    let text: String = format_amount(amount).chars().take(width).collect();
    format!("{:>width$}", text, width = width)
}

/// Format a balance for the report's total line
///
/// Uses the shortest decimal text that round-trips, and keeps a trailing
/// `.0` on integral values so `900` reads as `900.0`. Magnitudes of `1e16`
/// and above or below `1e-4` switch to exponent form with a signed,
/// two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_balance(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if !amount.is_finite() {
        return amount.to_string();
    }

    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(amount);
    }

    let text = amount.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn format_exponent(amount: f64) -> String {
    let text = format!("{:e}", amount);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Check whether an amount may be withdrawn at all
///
/// Withdrawals must be finite and strictly positive, so the withdrawn totals
/// only ever grow.
pub fn is_withdrawable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

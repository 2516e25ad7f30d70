//! Balance aggregation - computes what a client owes.
//!
//! A client's balance is the sum of `price × quantity` over its
//! product-lines, in plain f64 arithmetic. No currency rounding happens
//! here; the display layer formats to two decimals. Callers needing exact
//! cents must apply their own fixed-point policy.

use crate::entities::ProductLine;

/// Total owed across a sequence of product-lines. Zero for an empty
/// sequence; always non-negative given non-negative prices.
#[must_use]
pub fn total(lines: &[ProductLine]) -> f64 {
    lines
        .iter()
        .map(|line| line.price * f64::from(line.quantity))
        .sum()
}

/// Formats an amount for display, e.g. `$30.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::line;

    #[test]
    fn test_total_of_no_lines_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_total_single_line() {
        // Ana's consignment: 3 units of Food at $10
        let lines = vec![line(1, "Food", 10.0, 3)];
        assert_eq!(total(&lines), 30.0);
    }

    #[test]
    fn test_total_sums_across_lines() {
        let lines = vec![
            line(1, "Food", 10.0, 3),
            line(2, "Gravel", 4.5, 2),
            line(3, "Net", 7.25, 0),
        ];
        assert_eq!(total(&lines), 39.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(30.0), "$30.00");
        assert_eq!(format_amount(4.5), "$4.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }
}

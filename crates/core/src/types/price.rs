//! Money and number formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits kept by [`format_grouped`].
const GROUPED_MAX_FRACTION_DIGITS: u32 = 3;

/// Format an amount as dollars with exactly two decimals (`$1234.50`).
///
/// No thousands separators; table cells use this form.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Format a number with thousands separators (`12,345.5`).
///
/// Keeps at most three fraction digits and drops trailing zeros, the way
/// `en-US` locale formatting does.
#[must_use]
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(
            GROUPED_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format a count with thousands separators (`1,024`).
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(dec("0")), "$0.00");
        assert_eq!(format_money(dec("12.5")), "$12.50");
        assert_eq!(format_money(dec("1234.567")), "$1234.57");
        assert_eq!(format_money(dec("0.005")), "$0.01");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(dec("0")), "0");
        assert_eq!(format_grouped(dec("999")), "999");
        assert_eq!(format_grouped(dec("1000")), "1,000");
        assert_eq!(format_grouped(dec("12345.50")), "12,345.5");
        assert_eq!(format_grouped(dec("1234567.8919")), "1,234,567.892");
        assert_eq!(format_grouped(dec("-4500")), "-4,500");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1024), "1,024");
        assert_eq!(format_count(-1_000_000), "-1,000,000");
    }
}

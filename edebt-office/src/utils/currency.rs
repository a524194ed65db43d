//! Money display formatting
//!
//! Vietnamese convention for đồng amounts (dot-grouped thousands, comma
//! decimals, trailing `₫`) and the usual dollar convention for USD lines.
//! Rounding matches the calculation layer: two decimals, midpoint away
//! from zero.

use rust_decimal::RoundingStrategy;
use shared::pricing::{Currency, to_decimal};

/// Format an amount for display in the given currency
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rounded = to_decimal(amount)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    match currency {
        Currency::Vnd => {
            out.push_str(&group_thousands(int_part, '.'));
            if let Some(frac) = frac_part {
                out.push(',');
                out.push_str(frac);
            }
            out.push(' ');
            out.push_str(currency.symbol());
        }
        Currency::Usd => {
            out.push_str(currency.symbol());
            out.push_str(&group_thousands(int_part, ','));
            if let Some(frac) = frac_part {
                out.push('.');
                out.push_str(frac);
            }
        }
    }

    out
}

/// Shorthand for the common đồng case
pub fn format_vnd(amount: f64) -> String {
    format_currency(amount, Currency::Vnd)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnd_grouping() {
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(1000.0), "1.000 ₫");
        assert_eq!(format_vnd(1234567.0), "1.234.567 ₫");
        assert_eq!(format_vnd(150_000_000.0), "150.000.000 ₫");
    }

    #[test]
    fn test_vnd_decimals_use_comma() {
        assert_eq!(format_vnd(1234567.5), "1.234.567,5 ₫");
        assert_eq!(format_vnd(107500.126), "107.500,13 ₫");
    }

    #[test]
    fn test_vnd_negative() {
        assert_eq!(format_vnd(-500000.0), "-500.000 ₫");
    }

    #[test]
    fn test_usd_formatting() {
        assert_eq!(format_currency(1000.0, Currency::Usd), "$1,000");
        assert_eq!(format_currency(1234567.5, Currency::Usd), "$1,234,567.5");
        assert_eq!(format_currency(19.99, Currency::Usd), "$19.99");
        assert_eq!(format_currency(-19.99, Currency::Usd), "-$19.99");
    }

    #[test]
    fn test_rounding_matches_calculation_layer() {
        // midpoint away from zero, two decimals; 0.125 is exact in binary
        assert_eq!(format_vnd(0.125), "0,13 ₫");
        assert_eq!(format_vnd(-0.125), "-0,13 ₫");
    }
}

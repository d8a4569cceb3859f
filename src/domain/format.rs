//! Number formatting for displayed amounts and rates.
//!
//! Output follows en-US conventions: `,` thousands separator, `.` decimal
//! point, at least [`MIN_FRACTION_DIGITS`] and at most [`MAX_FRACTION_DIGITS`]
//! fractional digits.
//!
//! ```text
//! 1234.5       -> 1,234.50
//! 0.000001234  -> 0.000001
//! 92           -> 92.00
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use super::rates::parse_amount;

// ============================================================================
// Constants
// ============================================================================

/// Fewest fractional digits shown.
pub const MIN_FRACTION_DIGITS: usize = 2;

/// Most fractional digits shown; further digits are rounded half-up.
pub const MAX_FRACTION_DIGITS: usize = 6;

// ============================================================================
// Formatting
// ============================================================================

/// Formats a number for display.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    let fixed = round_half_up(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < MIN_FRACTION_DIGITS {
        fraction.push('0');
    }

    let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero {
        "-"
    } else {
        ""
    };

    format!("{sign}{}.{fraction}", group_thousands(integer))
}

/// Rounds a non-negative value to [`MAX_FRACTION_DIGITS`], ties away from zero.
///
/// Rounding works on the shortest decimal form of `value`, so `0.0078125`
/// becomes `0.007813`. Values outside the `Decimal` range have no fractional
/// digits to round.
fn round_half_up(value: f64) -> String {
    match value.to_string().parse::<Decimal>() {
        Ok(decimal) => decimal
            .round_dp_with_strategy(
                MAX_FRACTION_DIGITS as u32,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .to_string(),
        Err(_) => format!("{:.*}", MAX_FRACTION_DIGITS, value),
    }
}

/// Inserts `,` every three digits of an unsigned digit string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats `value` followed by a currency code, e.g. `92.00 EUR`.
#[must_use]
pub fn format_money(value: f64, code: &str) -> String {
    format!("{} {code}", format_number(value))
}

/// Main result line: `"<amount> <FROM> = <result> <TO>"`.
///
/// An amount that does not parse is shown as zero.
#[must_use]
pub fn conversion_line(amount: &str, from: &str, result: f64, to: &str) -> String {
    let shown_amount = parse_amount(amount).unwrap_or(0.0);
    format!(
        "{} = {}",
        format_money(shown_amount, from),
        format_money(result, to)
    )
}

/// One-unit rate line: `"1 <FROM> = <rate> <TO>"`.
#[must_use]
pub fn rate_line(from: &str, rate: f64, to: &str) -> String {
    format!("1 {from} = {}", format_money(rate, to))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Table-driven tests for number formatting.
    #[test]
    fn test_format_number() {
        let cases = [
            (0.0, "0.00"),
            (1.0, "1.00"),
            (92.00000000000001, "92.00"),
            (0.92, "0.92"),
            (1234.5, "1,234.50"),
            (1_234_567.891, "1,234,567.891"),
            (0.000001234, "0.000001"),
            (0.0000004, "0.00"),
            (0.1234567, "0.123457"),
            (999.9999999, "1,000.00"),
            (-1234.5, "-1,234.50"),
            (-0.0000001, "0.00"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_number(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_format_number_rounds_ties_up() {
        let cases = [
            (0.0078125, "0.007813"),
            (1.0000005, "1.000001"),
            (0.0000005, "0.000001"),
            (2.0000025, "2.000003"),
            (-0.0078125, "-0.007813"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_number(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_group_thousands() {
        let cases = [
            ("0", "0"),
            ("999", "999"),
            ("1000", "1,000"),
            ("1234567890", "1,234,567,890"),
        ];

        for (input, expected) in cases {
            assert_eq!(group_thousands(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_conversion_line() {
        assert_snapshot!(
            conversion_line("100", "USD", 100.0 * 0.92, "EUR"),
            @"100.00 USD = 92.00 EUR"
        );
        assert_snapshot!(
            conversion_line("abc", "USD", 5.0, "EUR"),
            @"0.00 USD = 5.00 EUR"
        );
    }

    #[test]
    fn test_rate_line() {
        assert_snapshot!(rate_line("USD", 0.92, "EUR"), @"1 USD = 0.92 EUR");
        assert_snapshot!(rate_line("EUR", 1.0869566, "USD"), @"1 EUR = 1.086957 USD");
    }
}

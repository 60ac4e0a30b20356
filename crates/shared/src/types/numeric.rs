//! Numeric coercion and display rounding for money fields.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; rounding happens only at the
//! display boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for currency amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Parses a raw form field into a `Decimal`, coercing failures to zero.
///
/// Document editors feed every numeric field through this before it
/// reaches the calculator: empty strings, stray characters, and other
/// unparseable input silently become zero rather than an error.
#[must_use]
pub fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Clamps a negative value to zero.
///
/// Applied to quantity, rate, and discount at the payload boundary so
/// the calculator's non-negative input preconditions hold.
#[must_use]
pub fn non_negative_or_zero(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Rounds an amount to two decimal places for currency display.
///
/// Half-away-from-zero, the convention printed documents use. Core
/// arithmetic never calls this; totals keep full precision.
#[must_use]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("100", dec!(100))]
    #[case("12.50", dec!(12.50))]
    #[case(" 7.5 ", dec!(7.5))]
    #[case("-3", dec!(-3))]
    #[case("", dec!(0))]
    #[case("abc", dec!(0))]
    #[case("12.5.3", dec!(0))]
    fn test_parse_or_zero(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_or_zero(raw), expected);
    }

    #[test]
    fn test_non_negative_or_zero() {
        assert_eq!(non_negative_or_zero(dec!(5)), dec!(5));
        assert_eq!(non_negative_or_zero(dec!(0)), dec!(0));
        assert_eq!(non_negative_or_zero(dec!(-5)), dec!(0));
    }

    #[test]
    fn test_round_display_half_away_from_zero() {
        assert_eq!(round_display(dec!(1.005)), dec!(1.01));
        assert_eq!(round_display(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_display(dec!(2.344)), dec!(2.34));
        assert_eq!(round_display(dec!(2.345)), dec!(2.35));
    }

    #[test]
    fn test_round_display_preserves_whole_amounts() {
        assert_eq!(round_display(dec!(1062)), dec!(1062.00));
    }
}

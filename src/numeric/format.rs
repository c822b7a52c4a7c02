// ============================================================================
// Precision Formatting
// Shortest fixed-point text for a number at a given precision
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Precision used when callers have no preference.
pub const DEFAULT_PRECISION: i32 = 17;

/// The smallest positive `f64` (2^-1074) has exactly 1074 fractional
/// digits; more digits than that are always zero.
const MAX_FRACTION_DIGITS: usize = 1074;

/// `rust_decimal` supports at most 28 fractional digits.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Remove trailing fractional zeros and a dangling decimal point, and turn
/// negative zero into plain zero.
fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Render `value` with at most `precision` fractional digits.
///
/// - `precision > 0`: rounded to `precision` digits, trailing zeros trimmed
/// - `precision == 0`: rounded to an integer
/// - `precision < 0`: shortest text that reads back as the same `f64`
///
/// Integers never carry a decimal point and scientific notation is never
/// produced. Rounding is exact on the binary value; values that sit exactly
/// on a midpoint round half to even.
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
///
/// # Example
/// ```
/// use core_primitives::numeric::double_to_string;
///
/// assert_eq!(double_to_string(5.5555555, 5), "5.55556");
/// assert_eq!(double_to_string(12.2, 10), "12.2");
/// assert_eq!(double_to_string(12000.0, 1), "12000");
/// ```
pub fn double_to_string(value: f64, precision: i32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = match usize::try_from(precision) {
        Ok(digits) => format!("{:.*}", digits.min(MAX_FRACTION_DIGITS), value),
        Err(_) => format!("{}", value),
    };

    trim_fraction(text)
}

/// Render a [`Decimal`] with at most `precision` fractional digits.
///
/// Follows the trimming rules of [`double_to_string`]; midpoints round away
/// from zero. A negative precision renders every stored digit.
pub fn decimal_to_string(value: Decimal, precision: i32) -> String {
    let value = match u32::try_from(precision) {
        Ok(dp) => value.round_dp_with_strategy(
            dp.min(MAX_DECIMAL_SCALE),
            RoundingStrategy::MidpointAwayFromZero,
        ),
        Err(_) => value,
    };

    trim_fraction(value.normalize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(double_to_string(5.6783212, 5), "5.67832");
        assert_eq!(double_to_string(5.5555555, 5), "5.55556");
        assert_eq!(double_to_string(12.234333, 1), "12.2");
    }

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(double_to_string(12.2, 1), "12.2");
        assert_eq!(double_to_string(12.2, 2), "12.2");
        assert_eq!(double_to_string(12.2, 10), "12.2");
    }

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(double_to_string(12.0, 1), "12");
        assert_eq!(double_to_string(12.0, 0), "12");
        assert_eq!(double_to_string(12000.0, 0), "12000");
        assert_eq!(double_to_string(12000.0, 1), "12000");
        assert_eq!(double_to_string(12000.0, 10), "12000");
    }

    #[test]
    fn test_negative_precision_is_unconstrained() {
        assert_eq!(double_to_string(12345.0, -1), "12345");
        assert_eq!(double_to_string(0.1, -1), "0.1");
        assert_eq!(double_to_string(5.6783212, -1), "5.6783212");
    }

    #[test]
    fn test_no_scientific_notation() {
        assert_eq!(double_to_string(1e20, -1), "100000000000000000000");
        assert_eq!(double_to_string(1e-7, -1), "0.0000001");
        assert_eq!(double_to_string(1e-7, 3), "0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(double_to_string(-0.0, 5), "0");
        assert_eq!(double_to_string(-0.0, -1), "0");
        assert_eq!(double_to_string(-0.0001, 2), "0");
        assert_eq!(double_to_string(-1.26, 1), "-1.3");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(double_to_string(f64::NAN, 3), "NaN");
        assert_eq!(double_to_string(f64::INFINITY, 3), "inf");
        assert_eq!(double_to_string(f64::NEG_INFINITY, -1), "-inf");
    }

    #[test]
    fn test_huge_precision_is_capped() {
        assert_eq!(double_to_string(0.5, i32::MAX), "0.5");
    }

    #[test]
    fn test_default_precision() {
        assert_eq!(double_to_string(0.1, DEFAULT_PRECISION), "0.10000000000000001");
        assert_eq!(double_to_string(1.5, DEFAULT_PRECISION), "1.5");
    }

    #[test]
    fn test_decimal_to_string() {
        assert_eq!(decimal_to_string(Decimal::new(55555555, 7), 5), "5.55556");
        assert_eq!(decimal_to_string(Decimal::new(1220, 2), 10), "12.2");
        assert_eq!(decimal_to_string(Decimal::new(12000, 0), 1), "12000");
        assert_eq!(decimal_to_string(Decimal::new(125, 1), 0), "13");
        assert_eq!(decimal_to_string(Decimal::new(-1, 4), 2), "0");
        assert_eq!(decimal_to_string(Decimal::new(123450, 1), -1), "12345");
    }
}

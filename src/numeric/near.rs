// ============================================================================
// Floating Point Closeness
// Tolerant equality and symmetric rounding helpers
// ============================================================================

/// Default tolerance for [`double_near`].
pub const DEFAULT_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Split `x` into a mantissa in `[0.5, 1)` and a power of two exponent.
fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }

    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;

    if biased == 0 {
        // Subnormal: scale into the normal range first
        let (mantissa, exp) = frexp(x * f64::from_bits(0x4350_0000_0000_0000)); // 2^54
        return (mantissa, exp - 54);
    }

    let mantissa = f64::from_bits((bits & !(0x7ff << 52)) | (1022 << 52));
    (mantissa, biased - 1022)
}

/// Compare two numbers using [`DEFAULT_EPSILON`].
#[inline]
pub fn double_near(a: f64, b: f64) -> bool {
    double_near_eps(a, b, DEFAULT_EPSILON)
}

/// True when `a - b` lies in `(-epsilon, epsilon]`.
#[inline]
pub fn double_near_eps(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = a - b;
    diff > -epsilon && diff <= epsilon
}

/// Compare two numbers to `significant_digits` decimal significant digits.
///
/// Both values must share the same binary exponent; their mantissas are
/// then compared after rounding to the requested number of digits.
pub fn double_near_sig(a: f64, b: f64, significant_digits: i32) -> bool {
    let (a_mantissa, a_exp) = frexp(a);
    let (b_mantissa, b_exp) = frexp(b);
    let scale = 10f64.powi(significant_digits);

    a_exp == b_exp && (a_mantissa * scale).round() == (b_mantissa * scale).round()
}

/// Round to `places` decimals, halves away from zero.
///
/// Negative `places` rounds to tens, hundreds and so on.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let scale = 10f64.powi(places);
    (sign * value * scale).round() / scale * sign
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frexp() {
        assert_eq!(frexp(8.0), (0.5, 4));
        assert_eq!(frexp(-3.0), (-0.75, 2));
        assert_eq!(frexp(0.0), (0.0, 0));
        let (m, e) = frexp(f64::MIN_POSITIVE / 4.0);
        assert_eq!(m, 0.5);
        assert_eq!(e, -1023);
    }

    #[test]
    fn test_double_near() {
        assert!(double_near(0.1 + 0.2, 0.3));
        assert!(!double_near(1.0, 1.0001));
        assert!(double_near_eps(1.0, 1.0001, 0.001));
        // Half-open interval
        assert!(double_near_eps(1.5, 1.0, 0.5));
        assert!(!double_near_eps(1.0, 1.5, 0.5));
    }

    #[test]
    fn test_double_near_sig() {
        assert!(double_near_sig(1.0000001, 1.0000002, 5));
        assert!(!double_near_sig(1.0001, 1.0002, 5));
        // Different binary exponents never match
        assert!(!double_near_sig(0.99999999, 1.0, 3));
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(1.2345, 2), 1.23);
        assert_eq!(round_to_places(-1.2356, 3), -1.236);
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -3.0);
        assert_eq!(round_to_places(1234.0, -2), 1200.0);
    }
}

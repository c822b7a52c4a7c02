// ============================================================================
// Numeric Key
// Exact ordering across signed, unsigned and floating point payloads
// ============================================================================

use crate::domain::Variant;
use std::cmp::Ordering;

/// Numeric payload widened without loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumericKey {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl NumericKey {
    /// Extract the numeric payload of a value-bearing variant.
    pub(crate) fn of(value: &Variant) -> Option<Self> {
        match value {
            Variant::Int(i) => Some(NumericKey::Signed(i64::from(*i))),
            Variant::UInt(u) => Some(NumericKey::Unsigned(u64::from(*u))),
            Variant::LongLong(i) => Some(NumericKey::Signed(*i)),
            Variant::ULongLong(u) => Some(NumericKey::Unsigned(*u)),
            Variant::Double(d) => Some(NumericKey::Float(*d)),
            _ => None,
        }
    }

    /// Compare two keys by mathematical value.
    ///
    /// NaN sorts after every number and equal to itself; `-0.0 == 0.0`.
    pub(crate) fn compare(self, other: Self) -> Ordering {
        use NumericKey::*;

        match (self, other) {
            (Signed(a), Signed(b)) => a.cmp(&b),
            (Unsigned(a), Unsigned(b)) => a.cmp(&b),
            (Signed(a), Unsigned(b)) => i128::from(a).cmp(&i128::from(b)),
            (Unsigned(a), Signed(b)) => i128::from(a).cmp(&i128::from(b)),
            (Float(a), Float(b)) => compare_floats(a, b),
            (Float(a), Signed(b)) => compare_float_int(a, i128::from(b)),
            (Float(a), Unsigned(b)) => compare_float_int(a, i128::from(b)),
            (Signed(a), Float(b)) => compare_float_int(b, i128::from(a)).reverse(),
            (Unsigned(a), Float(b)) => compare_float_int(b, i128::from(a)).reverse(),
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compare a float against an integer without rounding either.
///
/// `i as f64` is the nearest double to `i`, so any strict inequality against
/// it is exact. On equality `f` is integral and within the `i128` range,
/// which makes the integer comparison exact as well.
fn compare_float_int(f: f64, i: i128) -> Ordering {
    if f.is_nan() {
        return Ordering::Greater;
    }

    match f.partial_cmp(&(i as f64)) {
        Some(Ordering::Equal) | None => (f as i128).cmp(&i),
        Some(ordering) => ordering,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_integer_widths() {
        assert_eq!(
            NumericKey::Signed(-1).compare(NumericKey::Unsigned(0)),
            Ordering::Less
        );
        assert_eq!(
            NumericKey::Unsigned(u64::MAX).compare(NumericKey::Signed(i64::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            NumericKey::Unsigned(7).compare(NumericKey::Signed(7)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_float_against_integer_is_exact() {
        // 2^53 + 1 is not representable as f64
        let big = (1i64 << 53) + 1;
        let rounded = big as f64;
        assert_eq!(
            NumericKey::Float(rounded).compare(NumericKey::Signed(big)),
            Ordering::Less
        );
        assert_eq!(
            NumericKey::Signed(big).compare(NumericKey::Float(rounded)),
            Ordering::Greater
        );
        assert_eq!(
            NumericKey::Float(1.5).compare(NumericKey::Signed(1)),
            Ordering::Greater
        );
        assert_eq!(
            NumericKey::Float(-0.5).compare(NumericKey::Unsigned(0)),
            Ordering::Less
        );
        assert_eq!(
            NumericKey::Float(u64::MAX as f64).compare(NumericKey::Unsigned(u64::MAX)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_nan_and_infinities() {
        assert_eq!(
            NumericKey::Float(f64::NAN).compare(NumericKey::Float(f64::INFINITY)),
            Ordering::Greater
        );
        assert_eq!(
            NumericKey::Float(f64::NAN).compare(NumericKey::Float(f64::NAN)),
            Ordering::Equal
        );
        assert_eq!(
            NumericKey::Signed(i64::MIN).compare(NumericKey::Float(f64::NAN)),
            Ordering::Less
        );
        assert_eq!(
            NumericKey::Float(f64::NEG_INFINITY).compare(NumericKey::Signed(i64::MIN)),
            Ordering::Less
        );
        assert_eq!(
            NumericKey::Float(-0.0).compare(NumericKey::Float(0.0)),
            Ordering::Equal
        );
    }
}

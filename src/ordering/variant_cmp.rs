// ============================================================================
// Variant Ordering
// Total order over dynamically typed values
// ============================================================================
//
// Priority of the rules:
// 1. Invalid < typed null < any value-bearing variant
// 2. Same kind: native order of the payload (lists element by element,
//    shorter prefix first)
// 3. Numeric kinds against each other: exact mathematical value, ties broken
//    by kind rank
// 4. Any other pair of kinds: kind rank
// 5. Kinds without a native order (bytes, other): textual representation

use super::numeric_key::NumericKey;
use crate::domain::Variant;
use std::cmp::Ordering;

/// Compare two sequences element by element; a strict prefix sorts first.
fn compare_sequences<T>(lhs: &[T], rhs: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    for (l, r) in lhs.iter().zip(rhs) {
        match cmp(l, r) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
    lhs.len().cmp(&rhs.len())
}

/// Kind rank of a valid variant (nulls use the rank of their kind).
fn rank(value: &Variant) -> u8 {
    value.kind().map_or(0, |kind| kind.rank())
}

/// Compare two variants.
///
/// This is a total order: every pair of variants compares, nothing panics,
/// and `variant_cmp(a, b) == variant_cmp(b, a).reverse()`.
pub fn variant_cmp(lhs: &Variant, rhs: &Variant) -> Ordering {
    use Variant::*;

    match (lhs, rhs) {
        // Invalid sorts before everything, including typed nulls
        (Invalid, Invalid) => Ordering::Equal,
        (Invalid, _) => Ordering::Less,
        (_, Invalid) => Ordering::Greater,

        // Typed nulls sort before any value
        (Null(a), Null(b)) => a.cmp(b),
        (Null(_), _) => Ordering::Less,
        (_, Null(_)) => Ordering::Greater,

        (Bool(a), Bool(b)) => a.cmp(b),
        (Char(a), Char(b)) => a.cmp(b),
        (Date(a), Date(b)) => a.cmp(b),
        (Time(a), Time(b)) => a.cmp(b),
        (DateTime(a), DateTime(b)) => a
            .date()
            .cmp(&b.date())
            .then_with(|| a.time().cmp(&b.time())),
        (String(a), String(b)) => a.cmp(b),

        (StringList(a), StringList(b)) => {
            compare_sequences(a.as_slice(), b.as_slice(), |l, r| l.cmp(r))
        },
        (List(a), List(b)) => compare_sequences(a.as_slice(), b.as_slice(), variant_cmp),

        (Bytes(a), Bytes(b)) => std::string::String::from_utf8_lossy(a)
            .cmp(&std::string::String::from_utf8_lossy(b))
            .then_with(|| a.cmp(b)),
        (
            Other {
                type_name: type_a,
                text: text_a,
            },
            Other {
                type_name: type_b,
                text: text_b,
            },
        ) => text_a.cmp(text_b).then_with(|| type_a.cmp(type_b)),

        _ => match (NumericKey::of(lhs), NumericKey::of(rhs)) {
            (Some(a), Some(b)) => a.compare(b).then_with(|| rank(lhs).cmp(&rank(rhs))),
            _ => rank(lhs).cmp(&rank(rhs)),
        },
    }
}

/// True when `lhs` sorts strictly before `rhs`.
///
/// # Example
/// ```
/// use core_primitives::domain::{Variant, VariantKind};
/// use core_primitives::ordering::variant_less_than;
///
/// assert!(variant_less_than(&Variant::Invalid, &Variant::Null(VariantKind::String)));
/// assert!(variant_less_than(&Variant::Null(VariantKind::String), &Variant::from("a")));
/// assert!(variant_less_than(
///     &Variant::from(vec![Variant::from(5)]),
///     &Variant::from(vec![Variant::from(5), Variant::from(6)]),
/// ));
/// ```
#[inline]
pub fn variant_less_than(lhs: &Variant, rhs: &Variant) -> bool {
    variant_cmp(lhs, rhs) == Ordering::Less
}

/// True when `lhs` sorts strictly after `rhs`.
#[inline]
pub fn variant_greater_than(lhs: &Variant, rhs: &Variant) -> bool {
    variant_cmp(lhs, rhs) == Ordering::Greater
}

/// Sort a slice of variants in place with [`variant_cmp`].
pub fn sort_variants(values: &mut [Variant]) {
    values.sort_by(variant_cmp);
}

/// A [`Variant`] ordered by [`variant_cmp`], usable as a map key.
///
/// Equality follows the order, so `NaN` equals `NaN` here.
#[derive(Debug, Clone, Default)]
pub struct OrderedVariant(pub Variant);

impl OrderedVariant {
    pub fn into_inner(self) -> Variant {
        self.0
    }
}

impl From<Variant> for OrderedVariant {
    fn from(value: Variant) -> Self {
        Self(value)
    }
}

impl PartialEq for OrderedVariant {
    fn eq(&self, other: &Self) -> bool {
        variant_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for OrderedVariant {}

impl PartialOrd for OrderedVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedVariant {
    fn cmp(&self, other: &Self) -> Ordering {
        variant_cmp(&self.0, &other.0)
    }
}

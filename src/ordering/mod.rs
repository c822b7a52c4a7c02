// ============================================================================
// Ordering Module
// Comparison of dynamically typed values
// ============================================================================

mod numeric_key;
mod variant_cmp;

pub use variant_cmp::{
    sort_variants, variant_cmp, variant_greater_than, variant_less_than, OrderedVariant,
};

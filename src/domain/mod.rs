// ============================================================================
// Domain Models Module
// Value objects shared by the parsers and the comparator
// ============================================================================

pub mod locale;
pub mod variant;

pub use locale::LocaleContext;
pub use variant::{KindOf, Variant, VariantKind};

// ============================================================================
// Core Primitives Library
// Small infrastructural building blocks shared by every subsystem
// ============================================================================

//! # Core Primitives
//!
//! Leaf-level utilities with no shared state between them.
//!
//! ## Features
//!
//! - **Permissive numeric parsing** that tolerates misplaced group separators
//! - **Precision formatting** to the shortest fixed-point text
//! - **Scoped signal blocking** with safe nesting and one-shot blocking
//! - **Total ordering** over dynamically typed values
//!
//! ## Example
//!
//! ```rust
//! use core_primitives::prelude::*;
//! use std::sync::Arc;
//!
//! // Parse with the active locale's markers, even with odd grouping
//! let locale = LocaleContext::german();
//! assert_eq!(permissive_to_double("10.00,5", &locale), Ok(1000.5));
//!
//! // Render with at most 5 decimals, trailing zeros trimmed
//! assert_eq!(double_to_string(5.5555555, 5), "5.55556");
//!
//! // Change a property without notifying anyone
//! let checked = Property::new("toggled", false);
//! let spy = Arc::new(SignalSpy::<bool>::new());
//! checked.changed().connect(spy.clone());
//! while_blocking(&checked).set(true);
//! assert_eq!(spy.count(), 0);
//!
//! // Order heterogeneous values
//! let lhs = Variant::from(vec![Variant::from(5), Variant::from(3)]);
//! let rhs = Variant::from(vec![Variant::from(5), Variant::from(6)]);
//! assert!(variant_less_than(&lhs, &rhs));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod ordering;
pub mod signals;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{LocaleContext, Variant, VariantKind};
    pub use crate::interfaces::{LoggingSlot, NoOpSlot, Observable, Slot};
    pub use crate::numeric::{
        decimal_to_string, double_near, double_to_string, permissive_to_decimal,
        permissive_to_double, permissive_to_int, permissive_to_long_long, NumericError,
        NumericResult,
    };
    pub use crate::ordering::{variant_cmp, variant_greater_than, variant_less_than, OrderedVariant};
    pub use crate::signals::{
        while_blocking, with_signals_blocked, Property, Signal, SignalBlocker, SignalSpy,
    };
}

// ============================================================================
// Numeric Module
// Locale-tolerant parsing, precision formatting and float comparison
// ============================================================================
//
// This module provides:
// - permissive_to_*: text to number conversion that ignores misplaced grouping
// - double_to_string / decimal_to_string: shortest fixed-point rendering
// - double_near*: tolerant float equality, round_to_places
// - NumericError: error type for every fallible conversion
//
// Design principles:
// - All parsing returns Result (no panics, no sentinel values)
// - No scientific notation in rendered text
// - Locale conventions are passed in explicitly, never read from globals

mod errors;
mod format;
mod near;
mod permissive;

pub use errors::{NumericError, NumericResult};
pub use format::{decimal_to_string, double_to_string, DEFAULT_PRECISION};
pub use near::{double_near, double_near_eps, double_near_sig, round_to_places, DEFAULT_EPSILON};
pub use permissive::{
    permissive_to_decimal, permissive_to_double, permissive_to_int, permissive_to_long_long,
};

// ============================================================================
// Permissive Numeric Parsing
// Locale-aware text to number conversion tolerant of misplaced grouping
// ============================================================================
//
// Every parser here validates the locale, then follows the same two steps:
// 1. Clean: trim, drop every group separator (wherever it sits), and map the
//    locale decimal point to '.'
// 2. Delegate the cleaned ASCII text to the standard parser for the target type
//
// "10,00" therefore parses as 1000 under a ',' grouping locale even though
// the grouping is not on a thousands boundary.

use super::errors::{NumericError, NumericResult};
use crate::domain::LocaleContext;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Inline capacity of the cleaning buffer; longer inputs spill to the heap.
const INLINE_DIGITS: usize = 32;

type CleanBuffer = SmallVec<[u8; INLINE_DIGITS]>;

/// Which parts of a number the grammar accepts.
#[derive(Debug, Clone, Copy)]
struct NumberSyntax {
    fraction: bool,
    exponent: bool,
}

impl NumberSyntax {
    const INTEGER: Self = Self {
        fraction: false,
        exponent: false,
    };
    const DECIMAL: Self = Self {
        fraction: true,
        exponent: false,
    };
    const FLOAT: Self = Self {
        fraction: true,
        exponent: true,
    };

    /// Check `[+-]? digits* ('.' digits*)? ([eE] [+-]? digits+)?` with at
    /// least one mantissa digit.
    fn accepts(self, bytes: &[u8]) -> bool {
        let mut pos = 0;
        let len = bytes.len();

        if pos < len && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }

        let int_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let mut mantissa_digits = pos - int_start;

        if self.fraction && pos < len && bytes[pos] == b'.' {
            pos += 1;
            let frac_start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            mantissa_digits += pos - frac_start;
        }

        if mantissa_digits == 0 {
            return false;
        }

        if self.exponent && pos < len && matches!(bytes[pos], b'e' | b'E') {
            pos += 1;
            if pos < len && matches!(bytes[pos], b'+' | b'-') {
                pos += 1;
            }
            let exp_start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == exp_start {
                return false;
            }
        }

        pos == len
    }
}

/// Strip group separators and normalize the decimal point.
///
/// Any non-ASCII character left after cleaning cannot belong to a number, so
/// it is rejected here rather than handed to the standard parser.
fn clean(text: &str, locale: &LocaleContext, map_decimal: bool) -> NumericResult<CleanBuffer> {
    let mut buffer = CleanBuffer::new();

    for ch in text.trim().chars() {
        if locale.is_group_separator(ch) {
            continue;
        }
        let ch = if map_decimal && ch == locale.decimal_point {
            '.'
        } else {
            ch
        };
        if !ch.is_ascii() {
            return Err(NumericError::InvalidInput);
        }
        buffer.push(ch as u8);
    }

    if buffer.is_empty() {
        return Err(NumericError::Empty);
    }

    Ok(buffer)
}

/// Validate `locale`, clean `text` and check it against `syntax`, returning
/// the cleaned text.
fn prepare<'b>(
    buffer: &'b mut CleanBuffer,
    text: &str,
    locale: &LocaleContext,
    syntax: NumberSyntax,
) -> NumericResult<&'b str> {
    locale.validate()?;
    *buffer = clean(text, locale, syntax.fraction)?;
    let buffer: &'b CleanBuffer = buffer;

    if !syntax.accepts(&buffer[..]) {
        return Err(NumericError::InvalidInput);
    }

    // Only ASCII bytes were pushed, so this cannot fail
    std::str::from_utf8(&buffer[..]).map_err(|_| NumericError::InvalidInput)
}

fn is_negative(cleaned: &str) -> bool {
    cleaned.starts_with('-')
}

fn map_int_error(kind: &IntErrorKind) -> NumericError {
    match kind {
        IntErrorKind::PosOverflow => NumericError::Overflow,
        IntErrorKind::NegOverflow => NumericError::Underflow,
        IntErrorKind::Empty => NumericError::Empty,
        _ => NumericError::InvalidInput,
    }
}

fn trace_failure<T>(kind: &str, text: &str, result: NumericResult<T>) -> NumericResult<T> {
    if let Err(err) = &result {
        tracing::trace!("Permissive {} parse of {:?} failed: {}", kind, text, err);
    }
    result
}

/// Parse a locale-formatted floating point number.
///
/// Group separators are removed wherever they occur and the locale decimal
/// point is accepted. Exponent notation (`1e3`) is accepted; textual
/// non-finite values (`inf`, `nan`) are not.
///
/// # Errors
/// - `Empty` if nothing remains after cleaning
/// - `InvalidInput` if the cleaned text is not a complete number
/// - `Overflow`/`Underflow` if the value is beyond the `f64` range
/// - `InvalidLocale` if `locale` fails [`LocaleContext::validate`]
///
/// # Example
/// ```
/// use core_primitives::domain::LocaleContext;
/// use core_primitives::numeric::permissive_to_double;
///
/// let de = LocaleContext::german();
/// assert_eq!(permissive_to_double("10.00,5", &de), Ok(1000.5));
/// ```
pub fn permissive_to_double(text: &str, locale: &LocaleContext) -> NumericResult<f64> {
    let mut buffer = CleanBuffer::new();
    let result = prepare(&mut buffer, text, locale, NumberSyntax::FLOAT).and_then(|cleaned| {
        let value = f64::from_str(cleaned).map_err(|_| NumericError::InvalidInput)?;
        if value.is_finite() {
            Ok(value)
        } else if is_negative(cleaned) {
            Err(NumericError::Underflow)
        } else {
            Err(NumericError::Overflow)
        }
    });
    trace_failure("double", text, result)
}

/// Parse a locale-formatted 32-bit integer.
///
/// # Errors
/// - `Empty` if nothing remains after cleaning
/// - `InvalidInput` if the cleaned text contains anything but a sign and digits
/// - `Overflow`/`Underflow` if the value does not fit in an `i32`
/// - `InvalidLocale` if `locale` fails [`LocaleContext::validate`]
pub fn permissive_to_int(text: &str, locale: &LocaleContext) -> NumericResult<i32> {
    let mut buffer = CleanBuffer::new();
    let result = prepare(&mut buffer, text, locale, NumberSyntax::INTEGER)
        .and_then(|cleaned| i32::from_str(cleaned).map_err(|e| map_int_error(e.kind())));
    trace_failure("int", text, result)
}

/// Parse a locale-formatted 64-bit integer.
///
/// # Errors
/// Same as [`permissive_to_int`], with the `i64` range.
pub fn permissive_to_long_long(text: &str, locale: &LocaleContext) -> NumericResult<i64> {
    let mut buffer = CleanBuffer::new();
    let result = prepare(&mut buffer, text, locale, NumberSyntax::INTEGER)
        .and_then(|cleaned| i64::from_str(cleaned).map_err(|e| map_int_error(e.kind())));
    trace_failure("long long", text, result)
}

/// Parse a locale-formatted number exactly into a [`Decimal`].
///
/// Unlike [`permissive_to_double`] no binary rounding happens, which makes
/// this the right choice for values that are later re-rendered as text.
///
/// # Errors
/// - `Empty` if nothing remains after cleaning
/// - `InvalidInput` if the cleaned text is not a plain decimal number
/// - `Overflow`/`Underflow` if the value is beyond the `Decimal` range
/// - `InvalidLocale` if `locale` fails [`LocaleContext::validate`]
pub fn permissive_to_decimal(text: &str, locale: &LocaleContext) -> NumericResult<Decimal> {
    let mut buffer = CleanBuffer::new();
    let result = prepare(&mut buffer, text, locale, NumberSyntax::DECIMAL).and_then(|cleaned| {
        // The syntax is already known to be valid, so failures are range errors
        Decimal::from_str(cleaned).map_err(|_| {
            if is_negative(cleaned) {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })
    });
    trace_failure("decimal", text, result)
}

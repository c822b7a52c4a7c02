// ============================================================================
// Numeric Errors
// Error types for locale-aware parsing and numeric conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while converting text to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the target type's maximum value
    Overflow,
    /// Result below the target type's minimum value
    Underflow,
    /// Input was empty after removing separators and whitespace
    Empty,
    /// Input string could not be consumed as a number
    InvalidInput,
    /// Locale markers are unusable (equal to each other, digits or signs)
    InvalidLocale,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "numeric overflow: value exceeded maximum of target type")
            },
            NumericError::Underflow => {
                write!(f, "numeric underflow: value below minimum of target type")
            },
            NumericError::Empty => write!(f, "empty input: nothing left to parse"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidLocale => write!(
                f,
                "invalid locale: decimal point and group separator must be distinct non-digit characters"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "numeric overflow: value exceeded maximum of target type"
        );
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::Empty);
        assert!(err.to_string().starts_with("empty input"));
    }
}

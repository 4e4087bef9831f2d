// ============================================================================
// Numeral Errors
// Error types for numeral encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while converting between numbers and numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Text is not a numeral the grammar recognizes
    InvalidNumeral,
    /// Value exceeds the decimal range or the vocabulary's largest unit
    Overflow,
    /// Fractional digits exceed the supported decimal scale
    PrecisionLoss,
    /// Floating-point input was infinite or NaN
    NonFinite,
    /// Vocabulary description is structurally incomplete
    InvalidVocabulary,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::InvalidNumeral => {
                write!(f, "invalid numeral: text could not be parsed as a number")
            },
            NumeralError::Overflow => {
                write!(f, "overflow: value exceeds the representable range")
            },
            NumeralError::PrecisionLoss => write!(
                f,
                "precision loss: fraction has more digits than can be represented"
            ),
            NumeralError::NonFinite => write!(f, "non-finite value: infinity or NaN"),
            NumeralError::InvalidVocabulary => {
                write!(f, "invalid vocabulary: marker list must not be empty")
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral conversions
pub type NumeralResult<T> = Result<T, NumeralError>;

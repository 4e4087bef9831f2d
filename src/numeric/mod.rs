// ============================================================================
// Numeric Module
// Decimal plumbing shared by the encoder and decoder
// ============================================================================
//
// This module provides:
// - NumeralError: Error types for conversions
// - Exact Decimal helpers (powers of ten, digit-string parsing, f64 input)
//
// Design principles:
// - Decimal values end to end, no float arithmetic in the grammar
// - All arithmetic is checked and returns Result (no panics)

mod decimal;
mod errors;

pub use decimal::{
    decimal_from_f64, parse_fraction_digits, parse_integer_digits, pow10, split_magnitude,
    MAX_FRACTION_DIGITS,
};
pub use errors::{NumeralError, NumeralResult};

// ============================================================================
// Decimal Helpers
// Exact conversions between Decimal values and their digit strings
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest number of fractional digits a `Decimal` can hold.
pub const MAX_FRACTION_DIGITS: usize = 28;

/// Compute 10^exp, failing once the result leaves the decimal range.
pub fn pow10(exp: u32) -> NumeralResult<Decimal> {
    let mut result = Decimal::ONE;
    for _ in 0..exp {
        result = result
            .checked_mul(Decimal::TEN)
            .ok_or(NumeralError::Overflow)?;
    }
    Ok(result)
}

/// Convert an `f64` into a `Decimal` through its shortest decimal rendering.
///
/// The shortest rendering is what a reader sees when the float is printed,
/// so `3.14` becomes exactly `3.14` rather than its binary approximation.
///
/// # Errors
/// - `NonFinite` for infinities and NaN
/// - `Overflow` if the integer part exceeds the decimal range
/// - `PrecisionLoss` if the value needs more than 28 fractional digits
///
/// # Example
/// ```
/// use chinese_numerals::numeric::decimal_from_f64;
///
/// let d = decimal_from_f64(3.14).unwrap();
/// assert_eq!(d.to_string(), "3.14");
/// ```
pub fn decimal_from_f64(value: f64) -> NumeralResult<Decimal> {
    if !value.is_finite() {
        return Err(NumeralError::NonFinite);
    }

    let rendered = value.to_string();
    let fraction_len = rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    if fraction_len > MAX_FRACTION_DIGITS {
        return Err(NumeralError::PrecisionLoss);
    }

    Decimal::from_str(&rendered).map_err(|_| NumeralError::Overflow)
}

/// Split a value into its absolute integer magnitude and its fractional digits.
///
/// The fractional digits are those of the normalized decimal string, so
/// `3.140` yields `"14"` and an integral value yields an empty string.
///
/// # Errors
/// Returns `Overflow` if the magnitude does not fit in a `u128`.
pub fn split_magnitude(value: Decimal) -> NumeralResult<(u128, String)> {
    let magnitude = value
        .abs()
        .trunc()
        .to_u128()
        .ok_or(NumeralError::Overflow)?;

    let fraction = value.fract().abs().normalize();
    let digits = if fraction.is_zero() {
        String::new()
    } else {
        fraction
            .to_string()
            .split_once('.')
            .map(|(_, digits)| digits.to_string())
            .unwrap_or_default()
    };

    Ok((magnitude, digits))
}

/// Parse a string of ASCII digits as a non-negative integer.
///
/// # Errors
/// - `InvalidNumeral` if the string is empty or contains a non-digit
/// - `Overflow` if the value exceeds the decimal range
pub fn parse_integer_digits(digits: &str) -> NumeralResult<Decimal> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumeralError::InvalidNumeral);
    }
    Decimal::from_str(digits).map_err(|_| NumeralError::Overflow)
}

/// Parse a string of ASCII digits as the digits after a decimal point.
///
/// # Examples
/// - "5" -> 0.5
/// - "05" -> 0.05
///
/// # Errors
/// - `InvalidNumeral` if the string contains a non-digit
/// - `PrecisionLoss` if there are more than 28 digits
pub fn parse_fraction_digits(digits: &str) -> NumeralResult<Decimal> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumeralError::InvalidNumeral);
    }
    if digits.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if digits.len() > MAX_FRACTION_DIGITS {
        return Err(NumeralError::PrecisionLoss);
    }
    Decimal::from_str(&format!("0.{}", digits)).map_err(|_| NumeralError::PrecisionLoss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0).unwrap(), Decimal::ONE);
        assert_eq!(pow10(4).unwrap(), Decimal::from(10_000));
        assert_eq!(pow10(28).unwrap().to_string(), format!("1{}", "0".repeat(28)));
        assert_eq!(pow10(29), Err(NumeralError::Overflow));
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64(3.14).unwrap(), Decimal::new(314, 2));
        assert_eq!(decimal_from_f64(-5.0).unwrap(), Decimal::from(-5));
        assert_eq!(decimal_from_f64(0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_from_f64_invalid() {
        assert_eq!(decimal_from_f64(f64::NAN), Err(NumeralError::NonFinite));
        assert_eq!(decimal_from_f64(f64::INFINITY), Err(NumeralError::NonFinite));
        assert_eq!(decimal_from_f64(1e40), Err(NumeralError::Overflow));
        assert_eq!(decimal_from_f64(1e-30), Err(NumeralError::PrecisionLoss));
    }

    #[test]
    fn test_split_magnitude() {
        let (magnitude, fraction) = split_magnitude(Decimal::new(-31_405, 3)).unwrap();
        assert_eq!(magnitude, 31);
        assert_eq!(fraction, "405");

        let (magnitude, fraction) = split_magnitude(Decimal::new(3140, 3)).unwrap();
        assert_eq!(magnitude, 3);
        assert_eq!(fraction, "14");

        let (magnitude, fraction) = split_magnitude(Decimal::from(42)).unwrap();
        assert_eq!(magnitude, 42);
        assert!(fraction.is_empty());
    }

    #[test]
    fn test_parse_integer_digits() {
        assert_eq!(parse_integer_digits("007").unwrap(), Decimal::from(7));
        assert_eq!(parse_integer_digits(""), Err(NumeralError::InvalidNumeral));
        assert_eq!(parse_integer_digits("1a"), Err(NumeralError::InvalidNumeral));
        assert_eq!(
            parse_integer_digits(&"9".repeat(40)),
            Err(NumeralError::Overflow)
        );
    }

    #[test]
    fn test_parse_fraction_digits() {
        assert_eq!(parse_fraction_digits("05").unwrap(), Decimal::new(5, 2));
        assert_eq!(parse_fraction_digits("").unwrap(), Decimal::ZERO);
        assert_eq!(
            parse_fraction_digits(&"1".repeat(29)),
            Err(NumeralError::PrecisionLoss)
        );
    }
}

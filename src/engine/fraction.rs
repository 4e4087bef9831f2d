// ============================================================================
// Fraction Encoder / Decoder
// Digit-by-digit text after the point marker
// ============================================================================
//
// Fractional digits are read positionally, never through the magnitude
// grammar. Zero is written with the alternate glyph (〇) on encode, and both
// zero glyphs are accepted on decode.

use crate::domain::Vocabulary;
use crate::numeric::{parse_fraction_digits, NumeralError, NumeralResult};
use rust_decimal::Decimal;

/// Write fractional ASCII digits as a point marker followed by digit glyphs.
///
/// Empty input (an integral number) yields empty text.
pub fn encode_fraction(digits: &str, vocabulary: &Vocabulary) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut text = String::with_capacity(digits.len() * 3 + 3);
    text.push(vocabulary.point().canonical());
    for value in digits.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0') {
        let index = if value == 0 { 10 } else { value as usize };
        text.push(vocabulary.digit(index));
    }
    text
}

/// Locate the first accepted point marker, trying markers in order.
///
/// Returns the byte offset of the marker and its length.
pub(crate) fn find_point(text: &str, vocabulary: &Vocabulary) -> Option<(usize, usize)> {
    vocabulary
        .point()
        .iter()
        .find_map(|point| text.find(point).map(|at| (at, point.len_utf8())))
}

/// Read the fractional value after the first point marker.
///
/// The sign is taken from a leading minus marker on `text` itself, so a
/// fraction-only value such as 負零點五 keeps its sign even though its
/// integer part is zero.
///
/// # Errors
/// - `InvalidNumeral` if a glyph after the point is not a digit
/// - `PrecisionLoss` if there are more than 28 fractional digits
pub fn decode_fraction(text: &str, vocabulary: &Vocabulary) -> NumeralResult<Decimal> {
    let Some((at, len)) = find_point(text, vocabulary) else {
        return Ok(Decimal::ZERO);
    };
    let tail = &text[at + len..];
    if tail.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let digits: String = if tail.bytes().all(|b| b.is_ascii_digit()) {
        tail.to_string()
    } else {
        tail.chars()
            .map(|glyph| {
                vocabulary
                    .digit_value(glyph)
                    .map(|value| char::from(b'0' + value))
                    .ok_or(NumeralError::InvalidNumeral)
            })
            .collect::<NumeralResult<String>>()?
    };

    let value = parse_fraction_digits(&digits)?;
    let negative = vocabulary.minus().strip_prefix(text).is_some();
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fraction() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(encode_fraction("14", vocabulary), "點一四");
        assert_eq!(encode_fraction("05", vocabulary), "點〇五");
        assert_eq!(encode_fraction("", vocabulary), "");
        assert_eq!(encode_fraction("5", Vocabulary::simplified()), "点五");
    }

    #[test]
    fn test_decode_glyph_digits() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(decode_fraction("三點一四", vocabulary).unwrap(), Decimal::new(14, 2));
        assert_eq!(decode_fraction("三點〇五", vocabulary).unwrap(), Decimal::new(5, 2));
        assert_eq!(decode_fraction("三點零五", vocabulary).unwrap(), Decimal::new(5, 2));
    }

    #[test]
    fn test_decode_ascii_digits() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(decode_fraction("三點25", vocabulary).unwrap(), Decimal::new(25, 2));
        assert_eq!(decode_fraction("三.5", vocabulary).unwrap(), Decimal::new(5, 1));
    }

    #[test]
    fn test_decode_without_fraction() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(decode_fraction("三", vocabulary).unwrap(), Decimal::ZERO);
        assert_eq!(decode_fraction("三點", vocabulary).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decode_sign_is_independent() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(decode_fraction("負零點五", vocabulary).unwrap(), Decimal::new(-5, 1));
        assert_eq!(decode_fraction("-三點25", vocabulary).unwrap(), Decimal::new(-25, 2));
    }

    #[test]
    fn test_decode_invalid_glyph() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(
            decode_fraction("三點一十", vocabulary),
            Err(NumeralError::InvalidNumeral)
        );
    }

    #[test]
    fn test_first_listed_point_wins() {
        // 點 is tried before '.', wherever they occur
        let vocabulary = Vocabulary::traditional();
        assert_eq!(decode_fraction("1.2點五", vocabulary).unwrap(), Decimal::new(5, 1));
    }
}

// ============================================================================
// Magnitude Encoder
// Integer magnitude -> canonical numeral text
// ============================================================================

use super::fraction::encode_fraction;
use super::sanitizer::sanitize_glyphs;
use crate::domain::{ConversionOptions, Vocabulary};
use crate::numeric::{split_magnitude, NumeralError, NumeralResult};
use rust_decimal::Decimal;

/// Write a non-negative integer magnitude as canonical numeral text.
///
/// Each decimal digit is paired with the unit for its position and the
/// result is sanitized. Outside cheque writing, a leading 一十 becomes 十.
///
/// # Errors
/// Returns `Overflow` if the magnitude has more digits than the vocabulary's
/// unit table has positions.
pub fn encode_magnitude(
    magnitude: u128,
    vocabulary: &Vocabulary,
    cheque_mode: bool,
) -> NumeralResult<String> {
    if magnitude == 0 {
        return Ok(vocabulary.zero().to_string());
    }

    let units = vocabulary.unit_table();
    let mut reversed = Vec::with_capacity(units.len() * 2);
    let mut remaining = magnitude;
    let mut position = 0;
    while remaining > 0 {
        let unit = units.get(position).ok_or(NumeralError::Overflow)?;
        if let Some(unit) = unit {
            reversed.push(unit);
        }
        reversed.push(vocabulary.digit((remaining % 10) as usize));
        remaining /= 10;
        position += 1;
    }
    reversed.reverse();

    let mut glyphs = sanitize_glyphs(&reversed, vocabulary);
    if !cheque_mode
        && glyphs.len() > 1
        && glyphs[0] == vocabulary.digit(1)
        && glyphs[1] == vocabulary.small_units()[0]
    {
        glyphs.remove(0);
    }

    Ok(glyphs.into_iter().collect())
}

/// Write a signed decimal number: sign, integer magnitude, then fraction.
///
/// # Errors
/// Returns `Overflow` if the integer part cannot be written with the
/// vocabulary's units.
pub fn encode(value: Decimal, options: &ConversionOptions<'_>) -> NumeralResult<String> {
    let vocabulary = options.vocabulary;
    let (magnitude, fraction_digits) = split_magnitude(value)?;

    let mut text = String::new();
    if value < Decimal::ZERO {
        text.push(vocabulary.minus().canonical());
    }
    text.push_str(&encode_magnitude(magnitude, vocabulary, options.cheque_mode)?);
    text.push_str(&encode_fraction(&fraction_digits, vocabulary));
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarkerSet;

    fn tw(magnitude: u128) -> String {
        encode_magnitude(magnitude, Vocabulary::traditional(), false).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(tw(0), "零");
        assert_eq!(
            encode_magnitude(0, Vocabulary::traditional(), true).unwrap(),
            "零"
        );
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(tw(5), "五");
        assert_eq!(tw(10), "十");
        assert_eq!(tw(15), "十五");
        assert_eq!(tw(23), "二十三");
        assert_eq!(tw(101), "一百零一");
        assert_eq!(tw(110), "一百一十");
        assert_eq!(tw(1010), "一千零一十");
    }

    #[test]
    fn test_big_units() {
        assert_eq!(tw(10_001), "一萬零一");
        assert_eq!(tw(100_000), "十萬");
        assert_eq!(tw(203_000), "二十萬三千");
        assert_eq!(tw(200_030), "二十萬零三十");
        assert_eq!(tw(100_000_000), "一億");
        assert_eq!(tw(100_010_000), "一億零一萬");
        assert_eq!(tw(120_000_000), "一億二千萬");
        assert_eq!(tw(1_000_000_000_000), "一兆");
        assert_eq!(tw(1_000_100_000_000), "一兆零一億");
    }

    #[test]
    fn test_cheque_mode_keeps_leading_one() {
        let vocabulary = Vocabulary::traditional();
        assert_eq!(encode_magnitude(10, vocabulary, true).unwrap(), "一十");
        assert_eq!(encode_magnitude(19, vocabulary, true).unwrap(), "一十九");
        assert_eq!(encode_magnitude(100_000, vocabulary, true).unwrap(), "一十萬");
        // Only a leading ten is affected
        assert_eq!(encode_magnitude(110, vocabulary, false).unwrap(), "一百一十");
    }

    #[test]
    fn test_overflow_past_largest_unit() {
        let vocabulary = Vocabulary::new(
            ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '〇'],
            ['十', '百', '千'],
            ['萬'],
            MarkerSet::new('第'),
            MarkerSet::new('點'),
            MarkerSet::new('負'),
        );
        assert_eq!(
            encode_magnitude(99_999, &vocabulary, false).unwrap(),
            "九萬九千九百九十九"
        );
        assert_eq!(
            encode_magnitude(100_000, &vocabulary, false),
            Err(NumeralError::Overflow)
        );
    }

    #[test]
    fn test_encode_signed_and_fraction() {
        let options = ConversionOptions::traditional();
        assert_eq!(encode(Decimal::from(-5), &options).unwrap(), "負五");
        assert_eq!(encode(Decimal::new(314, 2), &options).unwrap(), "三點一四");
        assert_eq!(encode(Decimal::new(-5, 1), &options).unwrap(), "負零點五");
        assert_eq!(encode(Decimal::new(305, 2), &options).unwrap(), "三點〇五");
    }

    #[test]
    fn test_encode_simplified() {
        let options = ConversionOptions::simplified();
        assert_eq!(encode(Decimal::from(-10_001), &options).unwrap(), "负一万零一");
        assert_eq!(encode(Decimal::new(15, 1), &options).unwrap(), "一点五");
    }
}

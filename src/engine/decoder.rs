// ============================================================================
// Magnitude Decoder
// Numeral text -> number, with tiered fallback grammars
// ============================================================================
//
// Decoding tries, in order:
// 1. Plain digit strings ("-12.5")
// 2. Positional digit glyphs without units (二〇二四 -> 2024)
// 3. The full unit grammar (二千零二十四 -> 2024), plus the fraction decoder
//
// The unit grammar resolves small units against the big unit that closes
// their tier with a bounded lookahead scan instead of backtracking.

use super::fraction::{decode_fraction, find_point};
use super::sanitizer::sanitize_glyphs;
use crate::domain::{Glyph, Vocabulary};
use crate::numeric::{
    parse_fraction_digits, parse_integer_digits, pow10, NumeralError, NumeralResult,
};
use rust_decimal::Decimal;

/// Maximum number of (digit, small unit) groups between a small unit and the
/// big unit closing its tier.
const MAX_LOOKAHEAD_GROUPS: usize = 2;

/// Which grammar decoded a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeTier {
    /// ASCII digits with optional sign and point
    Plain,
    /// Digit glyphs read by place value
    Positional,
    /// Digits with small and big units
    Grammar,
}

/// Decode numeral text after ordinal markers have been removed.
///
/// # Errors
/// - `InvalidNumeral` for text none of the grammars accepts
/// - `Overflow` / `PrecisionLoss` if the value leaves the decimal range
pub fn decode(text: &str, vocabulary: &Vocabulary) -> NumeralResult<(Decimal, DecodeTier)> {
    if let Some(result) = decode_plain(text) {
        return result.map(|value| (value, DecodeTier::Plain));
    }
    if let Some(result) = decode_positional(text, vocabulary) {
        return result.map(|value| (value, DecodeTier::Positional));
    }

    let integer = decode_integer(text, vocabulary)?;
    let fraction = decode_fraction(text, vocabulary)?;
    let value = integer
        .checked_add(fraction)
        .ok_or(NumeralError::Overflow)?;
    Ok((value, DecodeTier::Grammar))
}

// ============================================================================
// Tier 1: Plain Digit Strings
// ============================================================================

/// Decode `-?[0-9]+(\.[0-9]*)?`, or `None` if the text has another shape.
///
/// A trailing point without digits is ignored ("5." -> 5). More than 28
/// fractional digits is `PrecisionLoss`, as for glyph fractions.
pub fn decode_plain(text: &str) -> Option<NumeralResult<Decimal>> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    Some(parse_integer_digits(integer).and_then(|integer| {
        let value = checked_add(integer, parse_fraction_digits(fraction)?)?;
        Ok(if negative { -value } else { value })
    }))
}

// ============================================================================
// Tier 2: Positional Digit Glyphs
// ============================================================================

/// Decode a run of digit glyphs by place value, or `None` if the text
/// contains anything but digit glyphs.
pub fn decode_positional(text: &str, vocabulary: &Vocabulary) -> Option<NumeralResult<Decimal>> {
    if text.is_empty() {
        return None;
    }

    let digits = text
        .chars()
        .map(|glyph| vocabulary.digit_value(glyph).map(|value| char::from(b'0' + value)))
        .collect::<Option<String>>()?;
    Some(parse_integer_digits(&digits))
}

// ============================================================================
// Tier 3: Unit Grammar
// ============================================================================

/// Decode the integer part of numeral text written with units.
///
/// Anything from the first point marker on is ignored; a leading minus
/// marker negates the result.
///
/// # Errors
/// - `InvalidNumeral` if the text is empty or ungrammatical
/// - `Overflow` if the value leaves the decimal range
pub fn decode_integer(text: &str, vocabulary: &Vocabulary) -> NumeralResult<Decimal> {
    let integral = match find_point(text, vocabulary) {
        Some((at, _)) => &text[..at],
        None => text,
    };
    let (negative, unsigned) = match vocabulary.minus().strip_prefix(integral) {
        Some(rest) => (true, rest),
        None => (false, integral),
    };

    let raw: Vec<char> = unsigned.chars().collect();
    let mut glyphs = sanitize_glyphs(&raw, vocabulary);
    if glyphs.is_empty() {
        return Err(NumeralError::InvalidNumeral);
    }
    if glyphs == [vocabulary.zero()] {
        return Ok(Decimal::ZERO);
    }
    // 十二 is read as 一十二
    if glyphs[0] == vocabulary.small_units()[0] {
        glyphs.insert(0, vocabulary.digit(1));
    }

    let total = scan(&glyphs, vocabulary)?;
    Ok(if negative { -total } else { total })
}

/// Sum the contributions of sanitized glyphs, left to right.
fn scan(glyphs: &[char], vocabulary: &Vocabulary) -> NumeralResult<Decimal> {
    let mut total = Decimal::ZERO;
    let mut index = 0;
    // Position of the big unit closing the current tier, once resolved
    let mut resolved = None;

    while index < glyphs.len() {
        let digit = match vocabulary.classify(glyphs[index]) {
            Some(Glyph::Digit(value)) => Decimal::from(value),
            Some(Glyph::BigUnit(tier)) => {
                // A bare leading big unit counts as one; elsewhere it must be
                // the one a small unit's lookahead already applied.
                if index == 0 {
                    total = checked_add(total, big_unit_scale(tier)?)?;
                } else if resolved != Some(index) {
                    return Err(reject(glyphs, index));
                }
                index += 1;
                continue;
            },
            _ => return Err(reject(glyphs, index)),
        };

        let contribution = match glyphs.get(index + 1).map(|&g| vocabulary.classify(g)) {
            None => {
                index += 1;
                digit
            },
            Some(Some(Glyph::SmallUnit(exponent))) => {
                let mut value = checked_mul(digit, pow10(exponent)?)?;
                if let Some((offset, tier)) = closing_big_unit(&glyphs[index + 2..], vocabulary) {
                    value = checked_mul(value, big_unit_scale(tier)?)?;
                    resolved = Some(index + 2 + offset);
                }
                index += 2;
                value
            },
            Some(Some(Glyph::BigUnit(tier))) => {
                index += 2;
                checked_mul(digit, big_unit_scale(tier)?)?
            },
            // 零 between digits marks skipped positions
            Some(Some(Glyph::Digit(_))) if digit.is_zero() => {
                index += 1;
                Decimal::ZERO
            },
            _ => return Err(reject(glyphs, index)),
        };

        total = checked_add(total, contribution)?;
    }

    Ok(total)
}

/// Find the big unit closing the tier that starts at `rest`.
///
/// Scans at most two (digit, small unit) groups and an optional digit, each
/// optionally preceded by a single zero placeholder, and returns the tier of
/// the big unit that follows along with its offset in `rest`. Returns `None`
/// when the tier runs to the end of the text or breaks off without a big unit.
fn closing_big_unit(rest: &[char], vocabulary: &Vocabulary) -> Option<(usize, u32)> {
    let class_at = |i: usize| rest.get(i).and_then(|&g| vocabulary.classify(g));
    let mut groups = 0;
    let mut index = 0;

    loop {
        if class_at(index) == Some(Glyph::Digit(0)) {
            index += 1;
        }
        match (class_at(index), class_at(index + 1)) {
            (Some(Glyph::BigUnit(tier)), _) => return Some((index, tier)),
            (Some(Glyph::Digit(_)), Some(Glyph::BigUnit(tier))) => return Some((index + 1, tier)),
            (Some(Glyph::Digit(_)), Some(Glyph::SmallUnit(_)))
                if groups < MAX_LOOKAHEAD_GROUPS =>
            {
                groups += 1;
                index += 2;
            },
            _ => return None,
        }
    }
}

/// 10^(4 × (tier + 1))
fn big_unit_scale(tier: u32) -> NumeralResult<Decimal> {
    pow10(Glyph::big_unit_exponent(tier))
}

fn checked_add(a: Decimal, b: Decimal) -> NumeralResult<Decimal> {
    a.checked_add(b).ok_or(NumeralError::Overflow)
}

fn checked_mul(a: Decimal, b: Decimal) -> NumeralResult<Decimal> {
    a.checked_mul(b).ok_or(NumeralError::Overflow)
}

fn reject(glyphs: &[char], index: usize) -> NumeralError {
    tracing::debug!(
        "Rejected numeral {:?}: unexpected glyph at position {}",
        glyphs.iter().collect::<String>(),
        index
    );
    NumeralError::InvalidNumeral
}

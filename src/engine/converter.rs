// ============================================================================
// Numeral Converter
// Entry points tying vocabulary, encoder and decoder together
// ============================================================================

use super::decoder::decode;
use super::encoder::encode;
use crate::domain::{ConversionOptions, Script, Vocabulary};
use crate::numeric::NumeralResult;
use rust_decimal::Decimal;

/// Converts numbers to and from numeral text with fixed options.
///
/// # Example
/// ```
/// use chinese_numerals::prelude::*;
/// use rust_decimal::Decimal;
///
/// let converter = NumeralConverter::new(ConversionOptions::cheque());
/// assert_eq!(converter.to_words(15).unwrap(), "一十五");
/// assert_eq!(converter.from_words("一十五").unwrap(), Decimal::from(15));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumeralConverter<'v> {
    options: ConversionOptions<'v>,
}

impl<'v> NumeralConverter<'v> {
    /// Create a converter from options.
    pub fn new(options: ConversionOptions<'v>) -> Self {
        Self { options }
    }

    /// Converter for a vocabulary with standard writing.
    pub fn with_vocabulary(vocabulary: &'v Vocabulary) -> Self {
        Self::new(ConversionOptions::new(vocabulary))
    }

    #[inline]
    pub fn options(&self) -> &ConversionOptions<'v> {
        &self.options
    }

    #[inline]
    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.options.vocabulary
    }

    /// Write a number in cardinal form.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part is too large for the
    /// vocabulary's units.
    pub fn to_words(&self, number: impl Into<Decimal>) -> NumeralResult<String> {
        encode(number.into(), &self.options)
    }

    /// Write a number in ordinal form (第 followed by the cardinal form).
    pub fn to_words_ordinal(&self, number: impl Into<Decimal>) -> NumeralResult<String> {
        let mut text = String::new();
        text.push(self.vocabulary().ordinal().canonical());
        text.push_str(&self.to_words(number)?);
        Ok(text)
    }

    /// Read numeral text with this converter's vocabulary.
    ///
    /// Leading ordinal markers are ignored and empty text reads as zero.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` for text that is not a numeral, or
    /// `Overflow` / `PrecisionLoss` for values outside the decimal range.
    pub fn from_words(&self, text: &str) -> NumeralResult<Decimal> {
        if text.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let vocabulary = self.vocabulary();
        let mut text = text;
        for ordinal in vocabulary.ordinal().iter() {
            if let Some(rest) = text.strip_prefix(ordinal) {
                text = rest;
            }
        }

        let (value, tier) = decode(text, vocabulary)?;
        tracing::trace!("Decoded {:?} as {} ({:?})", text, value, tier);
        Ok(value)
    }
}

impl Default for NumeralConverter<'static> {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Write a number in Traditional Chinese.
///
/// ```
/// use chinese_numerals::to_words;
///
/// assert_eq!(to_words(110).unwrap(), "一百一十");
/// assert_eq!(to_words(-5).unwrap(), "負五");
/// ```
pub fn to_words(number: impl Into<Decimal>) -> NumeralResult<String> {
    NumeralConverter::default().to_words(number)
}

/// Write a number with explicit options.
pub fn to_words_with(
    number: impl Into<Decimal>,
    options: &ConversionOptions<'_>,
) -> NumeralResult<String> {
    NumeralConverter::new(*options).to_words(number)
}

/// Write a number in Traditional Chinese ordinal form.
pub fn to_words_ordinal(number: impl Into<Decimal>) -> NumeralResult<String> {
    NumeralConverter::default().to_words_ordinal(number)
}

/// Write a number in ordinal form with explicit options.
pub fn to_words_ordinal_with(
    number: impl Into<Decimal>,
    options: &ConversionOptions<'_>,
) -> NumeralResult<String> {
    NumeralConverter::new(*options).to_words_ordinal(number)
}

/// Prefix the Arabic form of a number with the ordinal marker ("第3").
pub fn to_ordinal(number: impl Into<Decimal>, vocabulary: &Vocabulary) -> String {
    format!("{}{}", vocabulary.ordinal().canonical(), number.into().normalize())
}

/// Read numeral text, guessing Simplified or Traditional from its glyphs.
///
/// ```
/// use chinese_numerals::from_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(from_words("二十三").unwrap(), Decimal::from(23));
/// assert_eq!(from_words("三亿").unwrap(), Decimal::from(300_000_000));
/// ```
pub fn from_words(text: &str) -> NumeralResult<Decimal> {
    let vocabulary = Vocabulary::for_script(Script::detect(text));
    NumeralConverter::with_vocabulary(vocabulary).from_words(text)
}

/// Read numeral text with an explicit vocabulary.
pub fn from_words_with(text: &str, vocabulary: &Vocabulary) -> NumeralResult<Decimal> {
    NumeralConverter::with_vocabulary(vocabulary).from_words(text)
}

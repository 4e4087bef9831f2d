// ============================================================================
// Chinese Numerals Library
// Bidirectional conversion between numbers and Chinese numeral text
// ============================================================================

//! # Chinese Numerals
//!
//! Converts numbers to and from Chinese numeral text.
//!
//! ## Features
//!
//! - **Simplified and Traditional** vocabularies, plus caller-defined ones
//! - **Cardinal and ordinal** forms, signed values and decimal fractions
//! - **Cheque writing** that keeps the explicit 一 before a leading 十
//! - **Canonical output**: redundant 零 and vacuous big units are removed
//! - **Tolerant decoding** of plain digits, positional glyphs (二〇二四) and
//!   full unit grammar (二千零二十四)
//!
//! ## Example
//!
//! ```rust
//! use chinese_numerals::prelude::*;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(to_words(10_001).unwrap(), "一萬零一");
//! assert_eq!(to_words_with(15, &ConversionOptions::cheque()).unwrap(), "一十五");
//! assert_eq!(
//!     to_words_with(-3, &ConversionOptions::simplified()).unwrap(),
//!     "负三"
//! );
//!
//! assert_eq!(from_words("二十三").unwrap(), Decimal::from(23));
//! assert_eq!(from_words("第十二").unwrap(), Decimal::from(12));
//! assert!(from_words("abc").is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use domain::{is_simplified_chinese, is_traditional_chinese};
pub use engine::{
    from_words, from_words_with, to_ordinal, to_words, to_words_ordinal, to_words_ordinal_with,
    to_words_with,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        is_simplified_chinese, is_traditional_chinese, ConversionOptions, MarkerSet, Script,
        Vocabulary,
    };
    pub use crate::engine::{
        from_words, from_words_with, sanitize, to_ordinal, to_words, to_words_ordinal,
        to_words_ordinal_with, to_words_with, NumeralConverter,
    };
    pub use crate::numeric::{decimal_from_f64, NumeralError, NumeralResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_round_trip() {
        for vocabulary in [Vocabulary::traditional(), Vocabulary::simplified()] {
            let options = ConversionOptions::new(vocabulary);
            for n in [0_i64, 7, 10, 19, 101, 1010, 10_001, 100_000, 99_999_999, -12_345] {
                let text = to_words_with(n, &options).unwrap();
                assert_eq!(
                    from_words_with(&text, vocabulary).unwrap(),
                    Decimal::from(n),
                    "{} -> {}",
                    n,
                    text
                );
            }
        }
    }

    #[test]
    fn test_float_input_round_trip() {
        let value = decimal_from_f64(-1234.5678).unwrap();
        let text = to_words(value).unwrap();
        assert_eq!(text, "負一千二百三十四點五六七八");
        assert_eq!(from_words(&text).unwrap(), value);
    }

    #[test]
    fn test_cheque_round_trip() {
        let converter = NumeralConverter::new(ConversionOptions::cheque());
        let text = converter.to_words(110_015).unwrap();
        assert_eq!(text, "一十一萬零一十五");
        assert_eq!(converter.from_words(&text).unwrap(), Decimal::from(110_015));
    }

    #[test]
    fn test_ordinal_round_trip() {
        let text = to_words_ordinal(21).unwrap();
        assert_eq!(text, "第二十一");
        assert_eq!(from_words(&text).unwrap(), Decimal::from(21));
    }

    #[test]
    fn test_custom_vocabulary_round_trip() {
        let formal = Vocabulary::new(
            ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖', '〇'],
            ['拾', '佰', '仟'],
            ['萬', '億'],
            MarkerSet::new('第'),
            MarkerSet::new('點').with_alternate('.'),
            MarkerSet::new('負').with_alternate('-'),
        );
        let options = ConversionOptions::new(&formal).with_cheque_mode(true);

        let text = to_words_with(Decimal::new(10_050, 2), &options).unwrap();
        assert_eq!(text, "壹佰點伍");
        assert_eq!(from_words_with(&text, &formal).unwrap(), Decimal::new(1005, 1));
    }

    #[test]
    fn test_locale_probes() {
        assert!(is_traditional_chinese("萬"));
        assert!(is_simplified_chinese("万"));
        assert_eq!(Script::detect("二十"), Script::Traditional);
    }
}

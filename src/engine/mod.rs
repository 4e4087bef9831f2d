// ============================================================================
// Conversion Engine Module
// Encoder, sanitizer and tiered decoder for numeral text
// ============================================================================

pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod fraction;
pub mod sanitizer;

pub use converter::{
    from_words, from_words_with, to_ordinal, to_words, to_words_ordinal, to_words_ordinal_with,
    to_words_with, NumeralConverter,
};
pub use decoder::{decode, decode_integer, decode_plain, decode_positional, DecodeTier};
pub use encoder::{encode, encode_magnitude};
pub use fraction::{decode_fraction, encode_fraction};
pub use sanitizer::sanitize;

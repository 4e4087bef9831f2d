// ============================================================================
// Glyph Index
// Classification of numeral glyphs, derived once per vocabulary
// ============================================================================

use std::collections::HashMap;

/// The grammatical role of a numeral glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Digit with its face value (0-9); both zero spellings map to 0
    Digit(u8),
    /// Small unit with its power of ten (1 = ten, 2 = hundred, 3 = thousand)
    SmallUnit(u32),
    /// Big unit with its tier (0 = 10^4, 1 = 10^8, ...)
    BigUnit(u32),
}

impl Glyph {
    /// Power of ten a big unit of this tier scales by.
    #[inline]
    pub fn big_unit_exponent(tier: u32) -> u32 {
        4 * (tier + 1)
    }
}

/// Lookup table from glyph to its role.
///
/// When a vocabulary reuses a glyph across roles the first role registered
/// wins: digits, then small units, then big units.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphIndex {
    classes: HashMap<char, Glyph>,
}

impl GlyphIndex {
    /// Build the index from a vocabulary's glyph arrays.
    pub fn new(digits: &[char; 11], small_units: &[char; 3], big_units: &[char]) -> Self {
        let mut classes = HashMap::with_capacity(digits.len() + small_units.len() + big_units.len());
        for (value, &glyph) in digits.iter().enumerate() {
            classes
                .entry(glyph)
                .or_insert(Glyph::Digit((value % 10) as u8));
        }
        for (index, &glyph) in small_units.iter().enumerate() {
            classes
                .entry(glyph)
                .or_insert(Glyph::SmallUnit(index as u32 + 1));
        }
        for (tier, &glyph) in big_units.iter().enumerate() {
            classes.entry(glyph).or_insert(Glyph::BigUnit(tier as u32));
        }
        Self { classes }
    }

    /// Role of `glyph`, or `None` for glyphs outside the vocabulary.
    #[inline]
    pub fn classify(&self, glyph: char) -> Option<Glyph> {
        self.classes.get(&glyph).copied()
    }
}

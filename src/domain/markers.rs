// ============================================================================
// Marker Sets
// Ordinal, point and minus markers with one canonical spelling
// ============================================================================

use crate::numeric::NumeralError;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-empty set of marker glyphs.
///
/// The canonical glyph is emitted when encoding; the canonical glyph and all
/// alternates are accepted when decoding. Iteration yields the canonical glyph
/// first, then the alternates in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<char>", into = "Vec<char>")
)]
pub struct MarkerSet {
    canonical: char,
    alternates: SmallVec<[char; 2]>,
}

impl MarkerSet {
    /// Create a marker set with a single canonical glyph.
    pub fn new(canonical: char) -> Self {
        Self {
            canonical,
            alternates: SmallVec::new(),
        }
    }

    /// Builder method: accept an additional glyph when decoding
    pub fn with_alternate(mut self, glyph: char) -> Self {
        if !self.contains(glyph) {
            self.alternates.push(glyph);
        }
        self
    }

    /// The glyph emitted when encoding.
    #[inline]
    pub fn canonical(&self) -> char {
        self.canonical
    }

    /// Check whether `glyph` is any accepted spelling of this marker.
    #[inline]
    pub fn contains(&self, glyph: char) -> bool {
        self.canonical == glyph || self.alternates.contains(&glyph)
    }

    /// Iterate over all accepted glyphs, canonical first.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.canonical).chain(self.alternates.iter().copied())
    }

    /// Strip one leading marker from `text`, if present.
    pub fn strip_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        let first = text.chars().next()?;
        if self.contains(first) {
            Some(&text[first.len_utf8()..])
        } else {
            None
        }
    }
}

impl TryFrom<Vec<char>> for MarkerSet {
    type Error = NumeralError;

    fn try_from(glyphs: Vec<char>) -> Result<Self, Self::Error> {
        let mut glyphs = glyphs.into_iter();
        let canonical = glyphs.next().ok_or(NumeralError::InvalidVocabulary)?;
        Ok(glyphs.fold(Self::new(canonical), Self::with_alternate))
    }
}

impl From<MarkerSet> for Vec<char> {
    fn from(markers: MarkerSet) -> Self {
        markers.iter().collect()
    }
}

// ============================================================================
// Unit Table
// Positional index -> unit glyph, derived once per vocabulary
// ============================================================================

/// Flattened unit glyphs by decimal position.
///
/// Position 0 (the ones digit) carries no unit. Every following big-unit tier
/// contributes the three small units and then its own big unit, so for the
/// built-in vocabularies the table reads `["", 十, 百, 千, 萬, 十, 百, 千, 億, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    positions: Vec<Option<char>>,
}

impl UnitTable {
    /// Build the table from a vocabulary's small and big units.
    pub fn new(small_units: &[char; 3], big_units: &[char]) -> Self {
        let mut positions = Vec::with_capacity(1 + big_units.len() * 4);
        positions.push(None);
        for &big in big_units {
            positions.extend(small_units.iter().copied().map(Some));
            positions.push(Some(big));
        }
        Self { positions }
    }

    /// Unit for the digit at `position`, counting from the ones digit.
    ///
    /// Returns `None` when the position lies beyond the largest big unit;
    /// `Some(None)` for the ones digit.
    #[inline]
    pub fn get(&self, position: usize) -> Option<Option<char>> {
        self.positions.get(position).copied()
    }

    /// Number of decimal positions the table can encode.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a table built by [`UnitTable::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

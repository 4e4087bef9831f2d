// ============================================================================
// Vocabulary
// Symbol table for one numeral-writing convention
// ============================================================================

use super::glyph::{Glyph, GlyphIndex};
use super::locale::Script;
use super::markers::MarkerSet;
use super::unit_table::UnitTable;
use smallvec::SmallVec;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static SIMPLIFIED: OnceLock<Vocabulary> = OnceLock::new();
static TRADITIONAL: OnceLock<Vocabulary> = OnceLock::new();

const DIGITS: [char; 11] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '〇'];
const SMALL_UNITS: [char; 3] = ['十', '百', '千'];

/// The glyphs used to write numbers in one convention.
///
/// A vocabulary is immutable once built. Its unit table and glyph index are
/// derived at construction and live as long as the vocabulary does.
///
/// # Contract
/// - `digits[0..10]` are zero through nine, `digits[10]` is an alternate zero
///   used in formal writing
/// - `small_units` scale by ten, hundred and thousand
/// - each big unit scales by 10^4 over the previous one
///
/// Glyph sets are expected to be disjoint. This is not checked; overlapping
/// glyphs give unspecified (but never panicking) conversions.
///
/// # Example
/// ```
/// use chinese_numerals::domain::{MarkerSet, Vocabulary};
///
/// // Financial (capital) numerals
/// let formal = Vocabulary::new(
///     ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖', '〇'],
///     ['拾', '佰', '仟'],
///     ['萬', '億', '兆'],
///     MarkerSet::new('第'),
///     MarkerSet::new('點').with_alternate('.'),
///     MarkerSet::new('負').with_alternate('-'),
/// );
/// assert_eq!(formal.digit(3), '參');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "VocabularyDef", into = "VocabularyDef")
)]
pub struct Vocabulary {
    digits: [char; 11],
    small_units: [char; 3],
    big_units: SmallVec<[char; 12]>,
    ordinal: MarkerSet,
    point: MarkerSet,
    minus: MarkerSet,
    units: UnitTable,
    glyphs: GlyphIndex,
}

impl Vocabulary {
    /// Create a vocabulary and derive its lookup tables.
    pub fn new(
        digits: [char; 11],
        small_units: [char; 3],
        big_units: impl IntoIterator<Item = char>,
        ordinal: MarkerSet,
        point: MarkerSet,
        minus: MarkerSet,
    ) -> Self {
        let big_units: SmallVec<[char; 12]> = big_units.into_iter().collect();
        let units = UnitTable::new(&small_units, &big_units);
        let glyphs = GlyphIndex::new(&digits, &small_units, &big_units);
        Self {
            digits,
            small_units,
            big_units,
            ordinal,
            point,
            minus,
            units,
            glyphs,
        }
    }

    /// The built-in Simplified Chinese vocabulary.
    pub fn simplified() -> &'static Vocabulary {
        SIMPLIFIED.get_or_init(|| {
            Self::new(
                DIGITS,
                SMALL_UNITS,
                ['万', '亿', '兆', '京', '垓', '秭', '穰', '沟', '涧', '正', '载'],
                MarkerSet::new('第'),
                MarkerSet::new('点').with_alternate('.'),
                MarkerSet::new('负').with_alternate('-'),
            )
        })
    }

    /// The built-in Traditional Chinese vocabulary.
    pub fn traditional() -> &'static Vocabulary {
        TRADITIONAL.get_or_init(|| {
            Self::new(
                DIGITS,
                SMALL_UNITS,
                ['萬', '億', '兆', '京', '垓', '秭', '穰', '溝', '澗', '正', '載'],
                MarkerSet::new('第'),
                MarkerSet::new('點').with_alternate('.'),
                MarkerSet::new('負').with_alternate('-'),
            )
        })
    }

    /// The built-in vocabulary for a script.
    pub fn for_script(script: Script) -> &'static Vocabulary {
        match script {
            Script::Simplified => Self::simplified(),
            Script::Traditional => Self::traditional(),
        }
    }

    /// Load a vocabulary from its JSON description.
    ///
    /// # Errors
    /// Returns `InvalidVocabulary` for malformed JSON, wrong array lengths or
    /// an empty marker list.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::numeric::NumeralResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            tracing::debug!("Rejected vocabulary description: {}", err);
            crate::numeric::NumeralError::InvalidVocabulary
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Glyph for digit `value` (0-9), or the alternate zero for 10.
    ///
    /// Values past 10 wrap around the digit table.
    #[inline]
    pub fn digit(&self, value: usize) -> char {
        self.digits[value % self.digits.len()]
    }

    /// The canonical zero glyph.
    #[inline]
    pub fn zero(&self) -> char {
        self.digits[0]
    }

    /// The alternate zero glyph.
    #[inline]
    pub fn alternate_zero(&self) -> char {
        self.digits[10]
    }

    /// All eleven digit glyphs.
    #[inline]
    pub fn digits(&self) -> &[char; 11] {
        &self.digits
    }

    /// Glyphs for ten, hundred and thousand.
    #[inline]
    pub fn small_units(&self) -> &[char; 3] {
        &self.small_units
    }

    /// Glyphs for 10^4, 10^8, 10^12, ...
    #[inline]
    pub fn big_units(&self) -> &[char] {
        &self.big_units
    }

    #[inline]
    pub fn ordinal(&self) -> &MarkerSet {
        &self.ordinal
    }

    #[inline]
    pub fn point(&self) -> &MarkerSet {
        &self.point
    }

    #[inline]
    pub fn minus(&self) -> &MarkerSet {
        &self.minus
    }

    /// Positional unit table derived from the units.
    #[inline]
    pub fn unit_table(&self) -> &UnitTable {
        &self.units
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Role of `glyph` in this vocabulary.
    #[inline]
    pub fn classify(&self, glyph: char) -> Option<Glyph> {
        self.glyphs.classify(glyph)
    }

    /// Digit value of `glyph`, if it is a digit.
    #[inline]
    pub fn digit_value(&self, glyph: char) -> Option<u8> {
        match self.classify(glyph) {
            Some(Glyph::Digit(value)) => Some(value),
            _ => None,
        }
    }

    /// True for either spelling of zero.
    #[inline]
    pub fn is_zero(&self, glyph: char) -> bool {
        self.digit_value(glyph) == Some(0)
    }

    #[inline]
    pub fn is_digit(&self, glyph: char) -> bool {
        self.digit_value(glyph).is_some()
    }

    #[inline]
    pub fn is_small_unit(&self, glyph: char) -> bool {
        matches!(self.classify(glyph), Some(Glyph::SmallUnit(_)))
    }

    #[inline]
    pub fn is_big_unit(&self, glyph: char) -> bool {
        matches!(self.classify(glyph), Some(Glyph::BigUnit(_)))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::traditional().clone()
    }
}

/// Serialized shape of a vocabulary: the glyph tables without derived data.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct VocabularyDef {
    digits: [char; 11],
    small_units: [char; 3],
    big_units: Vec<char>,
    ordinal: MarkerSet,
    point: MarkerSet,
    minus: MarkerSet,
}

#[cfg(feature = "serde")]
impl From<VocabularyDef> for Vocabulary {
    fn from(def: VocabularyDef) -> Self {
        Self::new(
            def.digits,
            def.small_units,
            def.big_units,
            def.ordinal,
            def.point,
            def.minus,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Vocabulary> for VocabularyDef {
    fn from(vocabulary: Vocabulary) -> Self {
        Self {
            digits: vocabulary.digits,
            small_units: vocabulary.small_units,
            big_units: vocabulary.big_units.to_vec(),
            ordinal: vocabulary.ordinal,
            point: vocabulary.point,
            minus: vocabulary.minus,
        }
    }
}

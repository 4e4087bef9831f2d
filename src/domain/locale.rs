// ============================================================================
// Locale Heuristic
// Cheap character-presence probes for the Chinese script variant
// ============================================================================

/// Glyphs that only appear in Traditional numeral text.
const TRADITIONAL_ONLY: [char; 7] = ['萬', '億', '點', '負', '溝', '澗', '載'];

/// Glyphs that only appear in Simplified numeral text.
const SIMPLIFIED_ONLY: [char; 7] = ['万', '亿', '点', '负', '沟', '涧', '载'];

/// Chinese script variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Simplified characters (mainland China, Singapore)
    Simplified,
    /// Traditional characters (Taiwan, Hong Kong, Macau)
    #[default]
    Traditional,
}

impl Script {
    /// Guess the script of numeral text.
    ///
    /// Only a Simplified-only glyph without any Traditional-only glyph selects
    /// Simplified; text matching neither or both probes is Traditional.
    pub fn detect(text: &str) -> Self {
        if is_simplified_chinese(text) && !is_traditional_chinese(text) {
            Script::Simplified
        } else {
            Script::Traditional
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Script::Simplified => write!(f, "Simplified"),
            Script::Traditional => write!(f, "Traditional"),
        }
    }
}

/// Check if the text contains a glyph unique to Simplified numerals.
///
/// A `true` result guarantees Simplified glyphs are present; a `false`
/// result says nothing, since most numeral glyphs are shared.
pub fn is_simplified_chinese(text: &str) -> bool {
    text.chars().any(|c| SIMPLIFIED_ONLY.contains(&c))
}

/// Check if the text contains a glyph unique to Traditional numerals.
pub fn is_traditional_chinese(text: &str) -> bool {
    text.chars().any(|c| TRADITIONAL_ONLY.contains(&c))
}

// ============================================================================
// Conversion Configuration
// Vocabulary and writing-style options for encoding numbers
// ============================================================================

use super::vocabulary::Vocabulary;

// ============================================================================
// Conversion Options
// ============================================================================

/// Options controlling how numbers are written.
#[derive(Debug, Clone, Copy)]
pub struct ConversionOptions<'v> {
    /// The glyph set to write with
    pub vocabulary: &'v Vocabulary,

    /// Cheque (long-form) writing: keep the explicit "one" before a leading
    /// ten, so 15 is written 一十五 instead of 十五.
    /// Used on financial instruments to resist tampering.
    pub cheque_mode: bool,
}

impl<'v> ConversionOptions<'v> {
    /// Create options with the given vocabulary and standard writing
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            cheque_mode: false,
        }
    }

    /// Builder method: Set the vocabulary
    pub fn with_vocabulary(mut self, vocabulary: &'v Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Builder method: Enable or disable cheque writing
    pub fn with_cheque_mode(mut self, cheque_mode: bool) -> Self {
        self.cheque_mode = cheque_mode;
        self
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConversionOptions<'static> {
    /// Traditional Chinese, standard writing
    pub fn traditional() -> Self {
        Self::new(Vocabulary::traditional())
    }

    /// Simplified Chinese, standard writing
    pub fn simplified() -> Self {
        Self::new(Vocabulary::simplified())
    }

    /// Traditional Chinese, cheque writing
    pub fn cheque() -> Self {
        Self::traditional().with_cheque_mode(true)
    }
}

impl Default for ConversionOptions<'static> {
    fn default() -> Self {
        Self::traditional()
    }
}

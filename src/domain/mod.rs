// ============================================================================
// Domain Models Module
// Vocabularies, their derived tables and conversion options
// ============================================================================

pub mod config;
pub mod glyph;
pub mod locale;
pub mod markers;
pub mod unit_table;
pub mod vocabulary;

pub use config::ConversionOptions;
pub use glyph::{Glyph, GlyphIndex};
pub use locale::{is_simplified_chinese, is_traditional_chinese, Script};
pub use markers::MarkerSet;
pub use unit_table::UnitTable;
pub use vocabulary::Vocabulary;

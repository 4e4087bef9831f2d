// ============================================================================
// Basic Usage Example
// ============================================================================

use chinese_numerals::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), NumeralError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Chinese Numerals Example ===\n");

    // Cardinal numbers in both scripts
    println!("Cardinal:");
    for n in [0_i64, 10, 110, 10_001, 100_010_000, -5] {
        println!(
            "  {:>12} -> {} / {}",
            n,
            to_words(n)?,
            to_words_with(n, &ConversionOptions::simplified())?
        );
    }

    // Fractions, from exact decimals and from floats
    println!("\nFractions:");
    println!("  3.14     -> {}", to_words(Decimal::new(314, 2))?);
    println!("  -0.05    -> {}", to_words(decimal_from_f64(-0.05)?)?);

    // Cheque writing keeps the explicit 一 before a leading 十
    println!("\nCheque writing:");
    let cheque = ConversionOptions::cheque();
    for n in [10_i64, 15, 150_000] {
        println!("  {:>12} -> {} (standard: {})", n, to_words_with(n, &cheque)?, to_words(n)?);
    }

    // Ordinals
    println!("\nOrdinal:");
    println!("  3        -> {}", to_words_ordinal(3)?);
    println!("  3        -> {}", to_ordinal(3, Vocabulary::traditional()));

    // Decoding with script detection and tiered grammars
    println!("\n=== Decoding ===");
    for text in ["二十三", "十萬", "负三点五", "二〇二四", "第十二", "-42.5", "abc"] {
        match from_words(text) {
            Ok(value) => println!("  {:<10} -> {}", text, value),
            Err(err) => println!("  {:<10} -> error: {}", text, err),
        }
    }

    Ok(())
}

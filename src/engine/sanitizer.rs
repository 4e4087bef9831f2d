// ============================================================================
// Sanitizer
// Canonicalization of numeral text
// ============================================================================
//
// Raw encoder output pairs every digit with its positional unit, e.g.
// 10001 -> 一萬零千零百零十一. The passes below reduce it to canonical form
// (一萬零一). Pass order matters: each pass assumes the earlier collapses.
//
// Canonical form is a fixed point: sanitizing it again changes nothing.

use crate::domain::Vocabulary;

/// Normalize numeral text to canonical form.
///
/// # Example
/// ```
/// use chinese_numerals::domain::Vocabulary;
/// use chinese_numerals::engine::sanitize;
///
/// let vocabulary = Vocabulary::traditional();
/// assert_eq!(sanitize("一萬零千零百零十一", vocabulary), "一萬零一");
/// ```
pub fn sanitize(text: &str, vocabulary: &Vocabulary) -> String {
    let glyphs: Vec<char> = text.chars().collect();
    sanitize_glyphs(&glyphs, vocabulary).into_iter().collect()
}

pub(crate) fn sanitize_glyphs(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let glyphs = collapse_empty_small_units(glyphs, vocabulary);
    let glyphs = collapse_vacuous_tiers(&glyphs, vocabulary);
    let glyphs = drop_zeros_before_big_units(&glyphs, vocabulary);
    let glyphs = drop_leading_zeros(&glyphs, vocabulary);
    let glyphs = squash_zero_runs(&glyphs, vocabulary);
    strip_trailing_zeros(glyphs, vocabulary)
}

/// Number of consecutive zero glyphs starting at `start`.
fn zero_run(glyphs: &[char], start: usize, vocabulary: &Vocabulary) -> usize {
    glyphs
        .iter()
        .skip(start)
        .take_while(|&&g| vocabulary.is_zero(g))
        .count()
}

fn is_big_unit_at(glyphs: &[char], index: usize, vocabulary: &Vocabulary) -> bool {
    glyphs
        .get(index)
        .is_some_and(|&g| vocabulary.is_big_unit(g))
}

/// 零千, 零百, 零十 (either zero) -> 零
fn collapse_empty_small_units(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let mut out = Vec::with_capacity(glyphs.len());
    let mut index = 0;
    while index < glyphs.len() {
        let glyph = glyphs[index];
        index += 1;
        if vocabulary.is_zero(glyph)
            && glyphs.get(index).is_some_and(|&g| vocabulary.is_small_unit(g))
        {
            while glyphs.get(index).is_some_and(|&g| vocabulary.is_small_unit(g)) {
                index += 1;
            }
            out.push(vocabulary.zero());
        } else {
            out.push(glyph);
        }
    }
    out
}

/// 億零零零零萬 -> 億零: big units whose whole tier is zero are dropped.
fn collapse_vacuous_tiers(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let mut out = Vec::with_capacity(glyphs.len());
    let mut index = 0;
    while index < glyphs.len() {
        let glyph = glyphs[index];
        out.push(glyph);
        index += 1;
        if !vocabulary.is_big_unit(glyph) {
            continue;
        }

        let mut collapsed = false;
        loop {
            let zeros = zero_run(glyphs, index, vocabulary);
            if zeros == 0 || !is_big_unit_at(glyphs, index + zeros, vocabulary) {
                break;
            }
            index += zeros + 1;
            collapsed = true;
        }
        if collapsed {
            out.push(vocabulary.zero());
        }
    }
    out
}

/// 十零萬 -> 十萬
fn drop_zeros_before_big_units(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let mut out = Vec::with_capacity(glyphs.len());
    let mut index = 0;
    while index < glyphs.len() {
        let glyph = glyphs[index];
        out.push(glyph);
        index += 1;
        if vocabulary.is_small_unit(glyph) {
            let zeros = zero_run(glyphs, index, vocabulary);
            if zeros > 0 && is_big_unit_at(glyphs, index + zeros, vocabulary) {
                index += zeros;
            }
        }
    }
    out
}

/// 零五 -> 五
fn drop_leading_zeros(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let mut start = 0;
    while start + 1 < glyphs.len()
        && vocabulary.is_zero(glyphs[start])
        && vocabulary.is_digit(glyphs[start + 1])
    {
        start += 1;
    }
    glyphs[start..].to_vec()
}

/// 零〇零 -> 零
fn squash_zero_runs(glyphs: &[char], vocabulary: &Vocabulary) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(glyphs.len());
    for &glyph in glyphs {
        if vocabulary.is_zero(glyph) {
            if out.last() != Some(&vocabulary.zero()) {
                out.push(vocabulary.zero());
            }
        } else {
            out.push(glyph);
        }
    }
    out
}

/// Zero itself is never stripped to empty text.
fn strip_trailing_zeros(mut glyphs: Vec<char>, vocabulary: &Vocabulary) -> Vec<char> {
    while glyphs.len() > 1 && glyphs.last().is_some_and(|&g| vocabulary.is_zero(g)) {
        glyphs.pop();
    }
    glyphs
}

//! Orthographic decomposition and recomposition.
//!
//! Devanāgarī is a syllabic script: a bare consonant glyph carries an
//! inherent short `a` unless a dependent-vowel sign or the
//! vowel-suppressor follows it. `decompose` unrolls that convention into
//! a flat phoneme sequence; `recompose` rolls it back up. For any
//! well-formed string the two are exact inverses.
//!
//! Both functions are total: unrecognized glyphs are skipped, nothing is
//! ever raised.

use unicode_segmentation::UnicodeSegmentation;

use crate::phonemes::{Phoneme, PhonemeRegistry, A, VIRAMA};

/// Converts orthographic text into an ordered phoneme sequence.
///
/// Scanning left to right:
/// - unrecognized glyphs (whitespace, punctuation, digits) are skipped;
/// - an independent vowel glyph is emitted directly;
/// - a consonant glyph is emitted, then one glyph of lookahead decides
///   its vowel: a dependent sign emits that vowel, the vowel-suppressor
///   emits nothing, anything else emits the inherent short `a`;
/// - a standalone modifier glyph is emitted as its own phoneme.
///
/// A trailing consonant at end of input still receives the inherent
/// vowel: the lookahead has nothing to suppress it.
///
/// # Examples
///
/// ```rust
/// use sandhika::orthography::decompose;
/// // द + े + व unrolls to the sounds d, e, v plus the inherent a on the
/// // trailing consonant; each sound reports its independent glyph.
/// let sounds = decompose("देव");
/// let symbols: String = sounds.iter().map(|p| p.symbol).collect();
/// assert_eq!(symbols, "दएवअ");
/// ```
pub fn decompose(text: &str) -> Vec<&'static Phoneme> {
    let registry = PhonemeRegistry::global();
    let glyphs: Vec<char> = text.chars().collect();
    let mut phonemes = Vec::with_capacity(glyphs.len());

    let mut i = 0;
    while i < glyphs.len() {
        let Some(p) = registry.get(glyphs[i]) else {
            // Whitespace, punctuation, digits: no phoneme, no error.
            i += 1;
            continue;
        };

        if p.is_vowel || p.is_modifier() {
            phonemes.push(p);
            i += 1;
            continue;
        }

        // A consonant; one glyph of lookahead decides its vowel.
        phonemes.push(p);
        if let Some(&next) = glyphs.get(i + 1) {
            if let Some(vowel) = registry.from_matra(next) {
                phonemes.push(vowel);
                i += 2;
                continue;
            }
            if next == VIRAMA.symbol {
                // Bare consonant; the cluster continues.
                i += 2;
                continue;
            }
        }
        phonemes.push(&A);
        i += 1;
    }

    phonemes
}

/// Converts a phoneme sequence back into orthographic text; the inverse
/// of [`decompose`] for any sequence it produced.
///
/// A vowel following a consonant attaches to it: the inherent `a` is
/// dropped (implicit in the script), any other vowel is written as its
/// dependent sign. A vowel with no consonant context is written with its
/// independent glyph. A consonant not followed by a vowel takes the
/// vowel-suppressor. Modifiers appearing directly in the sequence are
/// written verbatim.
pub fn recompose(phonemes: &[&Phoneme]) -> String {
    let mut text = String::new();

    for (i, p) in phonemes.iter().enumerate() {
        if p.is_vowel {
            let attaches = i > 0 && phonemes[i - 1].is_consonant();
            if !attaches {
                text.push(p.symbol);
            } else if p.symbol == A.symbol {
                // The inherent vowel is implicit after a consonant.
            } else if let Some(sign) = p.matra {
                text.push(sign);
            } else {
                text.push(p.symbol);
            }
        } else if p.is_modifier() {
            text.push(p.symbol);
        } else {
            text.push(p.symbol);
            let next_is_vowel = phonemes.get(i + 1).map_or(false, |n| n.is_vowel);
            if !next_is_vowel {
                text.push(VIRAMA.symbol);
            }
        }
    }

    text
}

/// Splits text into orthographic syllable clusters (akṣaras),
/// approximated by extended grapheme clusters with whitespace dropped.
/// Display-oriented; the engine itself never consumes this.
pub fn aksharas(text: &str) -> Vec<&str> {
    text.graphemes(true)
        .filter(|g| !g.chars().all(char::is_whitespace))
        .collect()
}

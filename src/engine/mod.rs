//! The sandhi rule engine.
//!
//! Given two Devanāgarī terms, the engine decomposes both, evaluates the
//! junction rules in fixed precedence order against the boundary pair
//! (last phoneme of the first term, first phoneme of the second),
//! produces a merged phoneme sequence, recomposes it, and attaches the
//! matched rule's citation.
//!
//! The dispatch table below encodes rule precedence explicitly: the
//! general savarṇa merger is tried before vṛddhi, vṛddhi before guṇa,
//! and the glide substitution last. First match wins.

use serde::Serialize;

use crate::orthography::{decompose, recompose};
use crate::phonemes::{
    Phoneme, PhonemeRegistry, A, AA, AI, AU, E, I, II, LA, O, RA, U, UU, VOCALIC_L, VOCALIC_R,
    VOCALIC_RR,
};
use crate::rules::{RuleRegistry, Sutra};

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result of a single junction operation. One-shot and immutable, owned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SandhiResult {
    /// Debug rendering of the two input terms, `"term1 + term2"`.
    pub original: String,
    /// Final orthographic string.
    pub modified: String,
    /// Citation of the rule that fired, if any.
    pub matched_rule: Option<&'static Sutra>,
    /// 1.0 when a rule matched or the call short-circuited on empty
    /// input; 0.0 when no rule applied.
    pub confidence: f64,
}

impl SandhiResult {
    fn short_circuit(original: String, modified: String) -> Self {
        Self {
            original,
            modified,
            matched_rule: None,
            confidence: 1.0,
        }
    }
}

// ============================================================================
// JUNCTION RULE DISPATCH
// ============================================================================

/// How a matched rule rewrites the boundary pair.
enum Splice {
    /// Replace both boundary phonemes with the given sequence.
    Merge(Vec<&'static Phoneme>),
    /// Replace only term1's final phoneme; term2's initial phoneme is
    /// retained.
    Substitute(&'static Phoneme),
}

type Matcher = fn(&PhonemeRegistry, &Phoneme, &Phoneme) -> Option<Splice>;

/// Ordered dispatch table, first match wins. The order models the
/// grammar's general-rule/exception precedence without re-deriving it.
static JUNCTION_RULES: [(&str, Matcher); 4] = [
    ("6.1.101", savarna_dirgha),
    ("6.1.88", vrddhi),
    ("6.1.87", guna),
    ("6.1.77", yan),
];

fn is_a_class(p: &Phoneme) -> bool {
    p == &A || p == &AA
}

/// 6.1.101 — two similar simple vowels merge into the long vowel of
/// their place. Places without a long member (the vocalic `ḷ`) fall
/// through to the remaining rules.
fn savarna_dirgha(reg: &PhonemeRegistry, last: &Phoneme, first: &Phoneme) -> Option<Splice> {
    if !last.is_vowel || !first.is_vowel || last.place != first.place {
        return None;
    }
    if !reg.is_simple_vowel(last) {
        return None;
    }
    let long = reg.lengthened(last.place)?;
    Some(Splice::Merge(vec![long]))
}

/// 6.1.88 — a/ā strengthens a following e-class or o-class diphthong.
fn vrddhi(_reg: &PhonemeRegistry, last: &Phoneme, first: &Phoneme) -> Option<Splice> {
    if !is_a_class(last) {
        return None;
    }
    if first == &E || first == &AI {
        return Some(Splice::Merge(vec![&AI]));
    }
    if first == &O || first == &AU {
        return Some(Splice::Merge(vec![&AU]));
    }
    None
}

/// 6.1.87 — a/ā strengthens a following simple vowel one grade.
fn guna(_reg: &PhonemeRegistry, last: &Phoneme, first: &Phoneme) -> Option<Splice> {
    if !is_a_class(last) {
        return None;
    }
    if first == &I || first == &II {
        return Some(Splice::Merge(vec![&E]));
    }
    if first == &U || first == &UU {
        return Some(Splice::Merge(vec![&O]));
    }
    if first == &VOCALIC_R || first == &VOCALIC_RR {
        return Some(Splice::Merge(vec![&A, &RA]));
    }
    if first == &VOCALIC_L {
        return Some(Splice::Merge(vec![&A, &LA]));
    }
    None
}

/// 6.1.77 — a semivowel-derivable vowel reduces to its glide before any
/// vowel. The following vowel is retained, not consumed.
fn yan(reg: &PhonemeRegistry, last: &Phoneme, first: &Phoneme) -> Option<Splice> {
    if !first.is_vowel {
        return None;
    }
    reg.glide_for(last).map(Splice::Substitute)
}

// ============================================================================
// ENGINE
// ============================================================================

/// Deterministic engine implementing the four supported junction rules.
///
/// Every operation is a pure function of its inputs plus the two
/// read-only registries; the engine holds no mutable state and is safe
/// to share across threads.
///
/// # Examples
///
/// ```rust
/// use sandhika::SandhiEngine;
///
/// let engine = SandhiEngine::new();
/// let result = engine.apply("देव", "आलय");
/// assert_eq!(result.modified, "देवालय");
/// assert_eq!(result.matched_rule.map(|r| r.id), Some("6.1.101"));
/// ```
pub struct SandhiEngine {
    phonemes: &'static PhonemeRegistry,
    citations: &'static RuleRegistry,
}

impl SandhiEngine {
    pub fn new() -> Self {
        Self {
            phonemes: PhonemeRegistry::global(),
            citations: RuleRegistry::global(),
        }
    }

    /// Combines two terms, applying the highest-priority junction rule.
    ///
    /// If either term is empty after trimming, or decomposes to nothing,
    /// the terms are concatenated directly at confidence 1.0 with no
    /// rule. If no rule matches the boundary, the terms are joined with
    /// a single space at confidence 0.0.
    pub fn apply(&self, term1: &str, term2: &str) -> SandhiResult {
        let t1 = term1.trim();
        let t2 = term2.trim();
        let original = format!("{t1} + {t2}");

        if t1.is_empty() || t2.is_empty() {
            return SandhiResult::short_circuit(original, format!("{t1}{t2}"));
        }

        let left = decompose(t1);
        let right = decompose(t2);
        let (Some(&last), Some(&first)) = (left.last(), right.first()) else {
            return SandhiResult::short_circuit(original, format!("{t1}{t2}"));
        };

        for (id, matcher) in &JUNCTION_RULES {
            let Some(splice) = matcher(self.phonemes, last, first) else {
                continue;
            };

            let mut merged: Vec<&'static Phoneme> =
                Vec::with_capacity(left.len() + right.len() + 1);
            merged.extend_from_slice(&left[..left.len() - 1]);
            match splice {
                Splice::Merge(replacement) => {
                    merged.extend(replacement);
                    merged.extend_from_slice(&right[1..]);
                }
                Splice::Substitute(glide) => {
                    merged.push(glide);
                    merged.extend_from_slice(&right);
                }
            }

            return SandhiResult {
                original,
                modified: recompose(&merged),
                matched_rule: self.citations.get(id),
                confidence: 1.0,
            };
        }

        SandhiResult {
            original,
            modified: format!("{t1} {t2}"),
            matched_rule: None,
            confidence: 0.0,
        }
    }

    /// Best-effort surface scan for likely traces of each rule in
    /// existing text. Checks literal substrings only and never consults
    /// the decomposer. Each heuristic fires independently, so several
    /// hints may apply to the same text.
    pub fn explain(&self, text: &str) -> Vec<String> {
        let mut hints = Vec::new();
        if text.contains("्य") {
            hints.push(self.hint("6.1.77", "'y' after a bare consonant may derive from i/ī + vowel"));
        }
        if text.contains('े') || text.contains('ो') {
            hints.push(self.hint("6.1.87", "'e'/'o' may derive from a/ā + i/u"));
        }
        if text.contains('ै') || text.contains('ौ') {
            hints.push(self.hint("6.1.88", "'ai'/'au' may derive from a/ā + e/o"));
        }
        if text.contains('ा') || text.contains('ी') || text.contains('ू') {
            hints.push(self.hint("6.1.101", "a long vowel may derive from two similar vowels"));
        }
        hints
    }

    /// The supported citations in canonical order.
    pub fn rules(&self) -> &'static [Sutra] {
        self.citations.all()
    }

    fn hint(&self, id: &str, note: &str) -> String {
        match self.citations.get(id) {
            Some(rule) => format!("Possible {} ({}): {}", rule.mnemonic, rule.id, note),
            None => note.to_owned(),
        }
    }
}

impl Default for SandhiEngine {
    fn default() -> Self {
        Self::new()
    }
}

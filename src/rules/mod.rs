//! Rule citations for the junction transformations.
//!
//! Each supported transformation is keyed to one Aṣṭādhyāyī citation.
//! The four records are loaded once into a read-only store; the id is an
//! opaque label, never used for ordering.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Classical classification tag for a grammar rule. All four junction
/// rules are operative rules; the other tags exist because the grammar
/// uses them for rules this engine may cite in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Vidhi: prescribes an operation.
    #[default]
    Operative,
    /// Saṃjñā: assigns a technical name.
    Designation,
    /// Paribhāṣā: governs how other rules are read.
    Interpretation,
    /// Adhikāra: a heading whose scope extends over following rules.
    Governing,
}

/// A grammar-rule citation: reference id, mnemonic phrase, and plain
/// gloss. Attached to a sandhi result for provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sutra {
    /// Dot-numbered grammar reference, e.g. `"6.1.87"`. Opaque label.
    pub id: &'static str,
    /// The rule's mnemonic phrase.
    pub mnemonic: &'static str,
    /// Plain description of the transformation.
    pub gloss: &'static str,
    /// Classification tag.
    pub category: RuleCategory,
}

/// The four supported junction rules, in canonical citation order.
static SUTRAS: [Sutra; 4] = [
    Sutra {
        id: "6.1.77",
        mnemonic: "iko yaṇaci",
        gloss: "ik (i/ī, u/ū, ṛ/ṝ, ḷ) before a vowel becomes yaṇ (y, v, r, l)",
        category: RuleCategory::Operative,
    },
    Sutra {
        id: "6.1.87",
        mnemonic: "ādguṇaḥ",
        gloss: "a/ā + i/ī → e;  a/ā + u/ū → o;  a/ā + ṛ/ṝ → ar;  a/ā + ḷ → al  (guṇa)",
        category: RuleCategory::Operative,
    },
    Sutra {
        id: "6.1.88",
        mnemonic: "vṛddhireci",
        gloss: "a/ā + e/ai → ai;  a/ā + o/au → au  (vṛddhi)",
        category: RuleCategory::Operative,
    },
    Sutra {
        id: "6.1.101",
        mnemonic: "akaḥ savarṇe dīrghaḥ",
        gloss: "two similar (savarṇa) simple vowels merge into the long vowel",
        category: RuleCategory::Operative,
    },
];

// ============================================================================
// REGISTRY
// ============================================================================

lazy_static! {
    static ref REGISTRY: RuleRegistry = RuleRegistry::build();
}

/// Read-only store of the supported citations, keyed by id.
pub struct RuleRegistry {
    by_id: HashMap<&'static str, &'static Sutra>,
}

impl RuleRegistry {
    /// The process-wide registry, constructed on first use.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn build() -> Self {
        Self {
            by_id: SUTRAS.iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Looks up a citation by id, e.g. `"6.1.101"`.
    pub fn get(&self, id: &str) -> Option<&'static Sutra> {
        self.by_id.get(id).copied()
    }

    /// All citations in canonical order.
    pub fn all(&self) -> &'static [Sutra] {
        &SUTRAS
    }
}

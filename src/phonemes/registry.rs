//! Symbol-indexed lookup over the fixed phoneme inventory.
//!
//! The registry is built once on first use and is immutable afterwards,
//! so it can be read from any number of threads without locking. Lookups
//! on an unknown symbol report "not found" rather than failing; callers
//! skip the offending input unit.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::{
    Phoneme, Place, A, AA, I, II, INVENTORY, LA, RA, U, UU, VA, VOCALIC_L, VOCALIC_R, VOCALIC_RR,
    YA,
};

static REGISTRY: Lazy<PhonemeRegistry> = Lazy::new(PhonemeRegistry::build);

/// Read-only catalog of the valid sound units with cheap classification
/// queries.
pub struct PhonemeRegistry {
    by_symbol: HashMap<char, &'static Phoneme>,
    by_matra: HashMap<char, &'static Phoneme>,
    simple_vowels: HashSet<char>,
    glides: HashMap<char, &'static Phoneme>,
}

impl PhonemeRegistry {
    /// The process-wide registry, constructed on first use.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn build() -> Self {
        let mut by_symbol = HashMap::with_capacity(INVENTORY.len());
        let mut by_matra = HashMap::new();
        for &p in INVENTORY.iter() {
            by_symbol.insert(p.symbol, p);
            if p.is_vowel {
                if let Some(sign) = p.matra {
                    by_matra.insert(sign, p);
                }
            }
        }

        // Short/long monophthongs and the vocalic liquids (the "ak" class).
        let simple_vowels = [
            &A,
            &AA,
            &I,
            &II,
            &U,
            &UU,
            &VOCALIC_R,
            &VOCALIC_RR,
            &VOCALIC_L,
        ]
        .iter()
        .map(|p| p.symbol)
        .collect();

        // The "ik" class: vocalic members that reduce to a glide.
        let glides: HashMap<char, &'static Phoneme> = [
            (I.symbol, &YA),
            (II.symbol, &YA),
            (U.symbol, &VA),
            (UU.symbol, &VA),
            (VOCALIC_R.symbol, &RA),
            (VOCALIC_RR.symbol, &RA),
            (VOCALIC_L.symbol, &LA),
        ]
        .into_iter()
        .collect();

        Self {
            by_symbol,
            by_matra,
            simple_vowels,
            glides,
        }
    }

    /// Looks up a phoneme by its independent glyph.
    pub fn get(&self, symbol: char) -> Option<&'static Phoneme> {
        self.by_symbol.get(&symbol).copied()
    }

    /// Looks up the vowel a dependent (mātrā) sign stands for.
    pub fn from_matra(&self, sign: char) -> Option<&'static Phoneme> {
        self.by_matra.get(&sign).copied()
    }

    /// True if the phoneme belongs to the simple-vowel class.
    pub fn is_simple_vowel(&self, p: &Phoneme) -> bool {
        self.simple_vowels.contains(&p.symbol)
    }

    /// The glide a semivowel-derivable vowel reduces to, if any.
    pub fn glide_for(&self, p: &Phoneme) -> Option<&'static Phoneme> {
        self.glides.get(&p.symbol).copied()
    }

    /// The long vowel shared by the simple vowels of a place. The vocalic
    /// `ḷ` has no long counterpart in the inventory, so its place reports
    /// none.
    pub fn lengthened(&self, place: Place) -> Option<&'static Phoneme> {
        match place {
            Place::Velar => Some(&AA),
            Place::Palatal => Some(&II),
            Place::Labial => Some(&UU),
            Place::Retroflex => Some(&VOCALIC_RR),
            _ => None,
        }
    }
}

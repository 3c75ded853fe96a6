//! Phoneme inventory (varṇamālā) for the sandhi engine.
//!
//! This module defines the atomic Devanāgarī sound units and their
//! articulatory properties. The inventory is fixed at process start and
//! never mutated; every phoneme is uniquely identified by its symbol.

use std::fmt;

use serde::Serialize;

pub mod registry;

pub use registry::PhonemeRegistry;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Place of articulation (sthāna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Place {
    /// Kaṇṭha: gutturals and `a`-class vowels.
    Velar,
    /// Tālu: palatals and `i`-class vowels.
    Palatal,
    /// Mūrdhan: retroflexes and the vocalic `ṛ`.
    Retroflex,
    /// Danta: dentals and the vocalic `ḷ`.
    Dental,
    /// Oṣṭha: labials and `u`-class vowels.
    Labial,
    /// Kaṇṭha-tālu: the diphthongs `e` and `ai`.
    VelarPalatal,
    /// Kaṇṭha-oṣṭha: the diphthongs `o` and `au`.
    VelarLabial,
    /// Danta-oṣṭha: the semivowel `v`.
    DentalLabial,
    /// Nāsikā: the nasalization mark.
    Nasal,
    /// No articulatory place (the vowel-suppressor).
    None,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Place::Velar => "velar",
            Place::Palatal => "palatal",
            Place::Retroflex => "retroflex",
            Place::Dental => "dental",
            Place::Labial => "labial",
            Place::VelarPalatal => "velar-palatal",
            Place::VelarLabial => "velar-labial",
            Place::DentalLabial => "dental-labial",
            Place::Nasal => "nasal",
            Place::None => "none",
        };
        write!(f, "{label}")
    }
}

/// An atomic sound unit with its articulatory properties.
///
/// # Examples
///
/// ```rust
/// use sandhika::phonemes::{A, KA};
/// assert!(A.is_vowel);
/// assert!(KA.is_consonant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phoneme {
    /// The independent glyph for this sound.
    pub symbol: char,
    /// True for vowels (svara).
    pub is_vowel: bool,
    /// True for voiced sounds (ghoṣa).
    pub is_voiced: bool,
    /// Place of articulation.
    pub place: Place,
    /// Dependent (mātrā) glyph used when this vowel follows a consonant.
    /// The inherent `a` has none: it is implicit in the script.
    pub matra: Option<char>,
}

impl Phoneme {
    const fn vowel(symbol: char, place: Place, matra: Option<char>) -> Self {
        Self {
            symbol,
            is_vowel: true,
            is_voiced: true,
            place,
            matra,
        }
    }

    const fn consonant(symbol: char, voiced: bool, place: Place) -> Self {
        Self {
            symbol,
            is_vowel: false,
            is_voiced: voiced,
            place,
            matra: None,
        }
    }

    const fn modifier(symbol: char, voiced: bool, place: Place) -> Self {
        Self::consonant(symbol, voiced, place)
    }

    /// Modifier phonemes mark the surrounding script stream rather than
    /// carrying a syllable of their own: the vowel-suppressor (virāma),
    /// the nasalization mark (anusvāra), and the aspiration mark
    /// (visarga).
    pub fn is_modifier(&self) -> bool {
        self.symbol == VIRAMA.symbol
            || self.symbol == ANUSVARA.symbol
            || self.symbol == VISARGA.symbol
    }

    /// True for consonants proper: neither a vowel nor a modifier.
    pub fn is_consonant(&self) -> bool {
        !self.is_vowel && !self.is_modifier()
    }
}

// ============================================================================
// INVENTORY — vowels (svara)
// ============================================================================

pub static A: Phoneme = Phoneme::vowel('अ', Place::Velar, None);
pub static AA: Phoneme = Phoneme::vowel('आ', Place::Velar, Some('ा'));
pub static I: Phoneme = Phoneme::vowel('इ', Place::Palatal, Some('ि'));
pub static II: Phoneme = Phoneme::vowel('ई', Place::Palatal, Some('ी'));
pub static U: Phoneme = Phoneme::vowel('उ', Place::Labial, Some('ु'));
pub static UU: Phoneme = Phoneme::vowel('ऊ', Place::Labial, Some('ू'));
pub static VOCALIC_R: Phoneme = Phoneme::vowel('ऋ', Place::Retroflex, Some('ृ'));
pub static VOCALIC_RR: Phoneme = Phoneme::vowel('ॠ', Place::Retroflex, Some('ॄ'));
pub static VOCALIC_L: Phoneme = Phoneme::vowel('ऌ', Place::Dental, Some('ॢ'));

pub static E: Phoneme = Phoneme::vowel('ए', Place::VelarPalatal, Some('े'));
pub static AI: Phoneme = Phoneme::vowel('ऐ', Place::VelarPalatal, Some('ै'));
pub static O: Phoneme = Phoneme::vowel('ओ', Place::VelarLabial, Some('ो'));
pub static AU: Phoneme = Phoneme::vowel('औ', Place::VelarLabial, Some('ौ'));

// ============================================================================
// INVENTORY — consonants (vyañjana)
// ============================================================================

pub static KA: Phoneme = Phoneme::consonant('क', false, Place::Velar);
pub static KHA: Phoneme = Phoneme::consonant('ख', false, Place::Velar);
pub static GA: Phoneme = Phoneme::consonant('ग', true, Place::Velar);
pub static GHA: Phoneme = Phoneme::consonant('घ', true, Place::Velar);
pub static NGA: Phoneme = Phoneme::consonant('ङ', true, Place::Velar);

pub static CA: Phoneme = Phoneme::consonant('च', false, Place::Palatal);
pub static CHA: Phoneme = Phoneme::consonant('छ', false, Place::Palatal);
pub static JA: Phoneme = Phoneme::consonant('ज', true, Place::Palatal);
pub static JHA: Phoneme = Phoneme::consonant('झ', true, Place::Palatal);
pub static NYA: Phoneme = Phoneme::consonant('ञ', true, Place::Palatal);

pub static TTA: Phoneme = Phoneme::consonant('ट', false, Place::Retroflex);
pub static TTHA: Phoneme = Phoneme::consonant('ठ', false, Place::Retroflex);
pub static DDA: Phoneme = Phoneme::consonant('ड', true, Place::Retroflex);
pub static DDHA: Phoneme = Phoneme::consonant('ढ', true, Place::Retroflex);
pub static NNA: Phoneme = Phoneme::consonant('ण', true, Place::Retroflex);

pub static TA: Phoneme = Phoneme::consonant('त', false, Place::Dental);
pub static THA: Phoneme = Phoneme::consonant('थ', false, Place::Dental);
pub static DA: Phoneme = Phoneme::consonant('द', true, Place::Dental);
pub static DHA: Phoneme = Phoneme::consonant('ध', true, Place::Dental);
pub static NA: Phoneme = Phoneme::consonant('न', true, Place::Dental);

pub static PA: Phoneme = Phoneme::consonant('प', false, Place::Labial);
pub static PHA: Phoneme = Phoneme::consonant('फ', false, Place::Labial);
pub static BA: Phoneme = Phoneme::consonant('ब', true, Place::Labial);
pub static BHA: Phoneme = Phoneme::consonant('भ', true, Place::Labial);
pub static MA: Phoneme = Phoneme::consonant('म', true, Place::Labial);

pub static YA: Phoneme = Phoneme::consonant('य', true, Place::Palatal);
pub static RA: Phoneme = Phoneme::consonant('र', true, Place::Retroflex);
pub static LA: Phoneme = Phoneme::consonant('ल', true, Place::Dental);
pub static VA: Phoneme = Phoneme::consonant('व', true, Place::DentalLabial);

pub static SHA: Phoneme = Phoneme::consonant('श', false, Place::Palatal);
pub static SSHA: Phoneme = Phoneme::consonant('ष', false, Place::Retroflex);
pub static SA: Phoneme = Phoneme::consonant('स', false, Place::Dental);
pub static HA: Phoneme = Phoneme::consonant('ह', true, Place::Velar);

// ============================================================================
// INVENTORY — modifiers
// ============================================================================

/// Vowel-suppressor (virāma): marks a consonant as bare.
pub static VIRAMA: Phoneme = Phoneme::modifier('्', false, Place::None);
/// Nasalization mark (anusvāra).
pub static ANUSVARA: Phoneme = Phoneme::modifier('ं', true, Place::Nasal);
/// Aspiration mark (visarga).
pub static VISARGA: Phoneme = Phoneme::modifier('ः', false, Place::Velar);

/// Every phoneme in the closed inventory, vowels first.
pub static INVENTORY: [&Phoneme; 49] = [
    &A,
    &AA,
    &I,
    &II,
    &U,
    &UU,
    &VOCALIC_R,
    &VOCALIC_RR,
    &VOCALIC_L,
    &E,
    &AI,
    &O,
    &AU,
    &KA,
    &KHA,
    &GA,
    &GHA,
    &NGA,
    &CA,
    &CHA,
    &JA,
    &JHA,
    &NYA,
    &TTA,
    &TTHA,
    &DDA,
    &DDHA,
    &NNA,
    &TA,
    &THA,
    &DA,
    &DHA,
    &NA,
    &PA,
    &PHA,
    &BA,
    &BHA,
    &MA,
    &YA,
    &RA,
    &LA,
    &VA,
    &SHA,
    &SSHA,
    &SA,
    &HA,
    &VIRAMA,
    &ANUSVARA,
    &VISARGA,
];

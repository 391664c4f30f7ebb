//! Phonetic units used to build pronounceable passwords.
use crate::{alphabet::AMBIGUOUS, PhonemeFlags};

const C: PhonemeFlags = PhonemeFlags::CONSONANT;
const V: PhonemeFlags = PhonemeFlags::VOWEL;
const CD: PhonemeFlags = C.union(PhonemeFlags::DIPHTHONG);
const VD: PhonemeFlags = V.union(PhonemeFlags::DIPHTHONG);
const CDN: PhonemeFlags = CD.union(PhonemeFlags::NOT_FIRST);

/// Text fragment and the flags describing how it may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    text: &'static str,
    flags: PhonemeFlags,
}

impl Phoneme {
    const fn new(text: &'static str, flags: PhonemeFlags) -> Self {
        Self { text, flags }
    }

    /// Text for the unit.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Flags for the unit.
    pub fn flags(&self) -> PhonemeFlags {
        self.flags
    }

    /// Number of characters in the unit.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Determine if the unit has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Determine if the unit contains an ambiguous character.
    pub fn is_ambiguous(&self) -> bool {
        self.text.chars().any(|c| AMBIGUOUS.contains(c))
    }
}

/// Every phonetic unit, in table order.
pub static PHONEMES: [Phoneme; 40] = [
    Phoneme::new("a", V),
    Phoneme::new("ae", VD),
    Phoneme::new("ah", VD),
    Phoneme::new("ai", VD),
    Phoneme::new("b", C),
    Phoneme::new("c", C),
    Phoneme::new("ch", CD),
    Phoneme::new("d", C),
    Phoneme::new("e", V),
    Phoneme::new("ee", VD),
    Phoneme::new("ei", VD),
    Phoneme::new("f", C),
    Phoneme::new("g", C),
    Phoneme::new("gh", CDN),
    Phoneme::new("h", C),
    Phoneme::new("i", V),
    Phoneme::new("ie", VD),
    Phoneme::new("j", C),
    Phoneme::new("k", C),
    Phoneme::new("l", C),
    Phoneme::new("m", C),
    Phoneme::new("n", C),
    Phoneme::new("ng", CDN),
    Phoneme::new("o", V),
    Phoneme::new("oh", VD),
    Phoneme::new("oo", VD),
    Phoneme::new("p", C),
    Phoneme::new("ph", CD),
    Phoneme::new("qu", CD),
    Phoneme::new("r", C),
    Phoneme::new("s", C),
    Phoneme::new("sh", CD),
    Phoneme::new("t", C),
    Phoneme::new("th", CD),
    Phoneme::new("u", V),
    Phoneme::new("v", C),
    Phoneme::new("w", C),
    Phoneme::new("x", C),
    Phoneme::new("y", C),
    Phoneme::new("z", C),
];

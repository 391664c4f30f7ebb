//! Character class alphabets.
use crate::GeneratorFlags;

/// Characters that are easily confused when printed.
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2";

/// Printable ASCII punctuation.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Uppercase roman letters.
pub const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase roman letters.
pub const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Vowels and the digits that may be mistaken for them.
pub const VOWELS: &str = "01aeiouyAEIOUY";

/// Live character classes for a generator.
///
/// Only the symbol alphabet may change, see
/// [CharacterSet::blacklist_symbols].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    symbols: String,
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self {
            symbols: SYMBOLS.to_owned(),
        }
    }
}

impl CharacterSet {
    /// Ambiguous characters.
    pub fn ambiguous(&self) -> &str {
        AMBIGUOUS
    }

    /// Symbol characters after any blacklisting.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    /// Vowel characters.
    pub fn vowels(&self) -> &str {
        VOWELS
    }

    /// Determine if a character is ambiguous.
    pub fn is_ambiguous(&self, c: char) -> bool {
        AMBIGUOUS.contains(c)
    }

    /// Determine if a character is a vowel.
    pub fn is_vowel(&self, c: char) -> bool {
        VOWELS.contains(c)
    }

    /// Determine if a character is in the symbol alphabet.
    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(c)
    }

    /// Determine if a character passes the exclusions in `flags`.
    pub fn accepts(&self, c: char, flags: GeneratorFlags) -> bool {
        !((flags.excludes_ambiguous() && self.is_ambiguous(c))
            || (flags.excludes_vowels() && self.is_vowel(c)))
    }

    /// Remove characters from the symbol alphabet.
    ///
    /// Nothing is removed unless every character is currently
    /// in the symbol alphabet. Returns whether the characters
    /// were removed.
    pub fn blacklist_symbols(&mut self, chars: &[char]) -> bool {
        if !chars.iter().all(|c| self.symbols.contains(*c)) {
            return false;
        }
        self.symbols.retain(|c| !chars.contains(&c));
        true
    }
}

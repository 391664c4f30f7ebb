//! Password generation strategies.
use crate::{alphabet::CharacterSet, csprng, GeneratorFlags, Result};
use rand::Rng;

mod phonemes;
mod random;

pub use phonemes::PhonemeGenerator;
pub use random::RandomGenerator;

/// Generates passwords of a fixed length for a set of flags.
pub trait Generator {
    /// Flags for generated passwords.
    fn flags(&self) -> GeneratorFlags;

    /// Length of generated passwords.
    fn len(&self) -> usize;

    /// Determine if this generator is zero length.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character classes used by this generator.
    fn charset(&self) -> &CharacterSet;

    /// Mutable character classes used by this generator.
    fn charset_mut(&mut self) -> &mut CharacterSet;

    /// Ambiguous characters.
    fn ambiguous(&self) -> &str {
        self.charset().ambiguous()
    }

    /// Symbol characters after any blacklisting.
    fn symbols(&self) -> &str {
        self.charset().symbols()
    }

    /// Vowel characters.
    fn vowels(&self) -> &str {
        self.charset().vowels()
    }

    /// Remove characters from the symbol alphabet.
    ///
    /// See [CharacterSet::blacklist_symbols].
    fn blacklist_symbols(&mut self, chars: &[char]) -> bool {
        self.charset_mut().blacklist_symbols(chars)
    }

    /// Generate a password using the given random source.
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String>;

    /// Generate a password using the secure random source.
    fn generate(&self) -> Result<String> {
        self.generate_with(&mut csprng())
    }
}

/// Password being assembled, filled from the left.
#[derive(Debug)]
pub(crate) struct PasswordBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl PasswordBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Space left in the buffer.
    pub fn remaining(&self) -> usize {
        self.capacity - self.chars.len()
    }

    pub fn is_full(&self) -> bool {
        self.chars.len() >= self.capacity
    }

    pub fn push(&mut self, c: char) {
        debug_assert!(!self.is_full());
        self.chars.push(c);
    }

    pub fn extend(&mut self, fragment: &[char]) {
        debug_assert!(fragment.len() <= self.remaining());
        self.chars.extend_from_slice(fragment);
    }

    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}

/// Minimum password length able to hold the requirements
/// in `flags` when each character satisfies one class.
pub(crate) fn required_classes(flags: GeneratorFlags) -> usize {
    flags.requirements().iter().count()
}

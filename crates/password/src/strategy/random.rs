use super::{required_classes, Generator, PasswordBuffer};
use crate::{
    alphabet::{CharacterSet, DIGITS, LOWERS, UPPERS},
    random::choose,
    Error, GeneratorFlags, Result,
};
use rand::Rng;

/// Generator that samples every character independently.
///
/// Produces passwords that are hard to remember, suitable
/// for machine credentials.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    flags: GeneratorFlags,
    length: usize,
    charset: CharacterSet,
}

impl RandomGenerator {
    /// Create a random generator.
    pub fn new(flags: GeneratorFlags, length: usize) -> Self {
        Self {
            flags,
            length,
            charset: Default::default(),
        }
    }

    /// Use a customized character set, for example one
    /// with blacklisted symbols.
    pub fn with_charset(mut self, charset: CharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Alphabet for the enabled character classes, before
    /// exclusions are applied.
    fn alphabet(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.flags.contains(GeneratorFlags::DIGITS) {
            chars.push_str(DIGITS);
        }
        if self.flags.contains(GeneratorFlags::UPPERS) {
            chars.push_str(UPPERS);
        }
        chars.push_str(LOWERS);
        if self.flags.contains(GeneratorFlags::SYMBOLS) {
            chars.push_str(self.charset.symbols());
        }
        chars.chars().collect()
    }

    /// Reject configurations that could never produce a password.
    fn validate(&self, alphabet: &[char]) -> Result<()> {
        if self.length == 0 {
            return Err(Error::ZeroLength);
        }

        let accepts = |c: char| self.charset.accepts(c, self.flags);
        let usable = |chars: &str| chars.chars().any(accepts);

        if !alphabet.iter().any(|c| accepts(*c)) {
            return Err(Error::EmptyAlphabet("password"));
        }
        if self.flags.contains(GeneratorFlags::DIGITS) && !usable(DIGITS) {
            return Err(Error::EmptyAlphabet("digit"));
        }
        if self.flags.contains(GeneratorFlags::UPPERS) && !usable(UPPERS) {
            return Err(Error::EmptyAlphabet("uppercase"));
        }
        if self.flags.contains(GeneratorFlags::SYMBOLS)
            && !usable(self.charset.symbols())
        {
            return Err(Error::EmptyAlphabet("symbol"));
        }

        let required = required_classes(self.flags);
        if self.length < required {
            return Err(Error::LengthTooShort {
                length: self.length,
                required,
            });
        }
        Ok(())
    }
}

impl Generator for RandomGenerator {
    fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    fn len(&self) -> usize {
        self.length
    }

    fn charset(&self) -> &CharacterSet {
        &self.charset
    }

    fn charset_mut(&mut self) -> &mut CharacterSet {
        &mut self.charset
    }

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let alphabet = self.alphabet();
        self.validate(&alphabet)?;

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let mut remaining = self.flags.requirements();
            let mut password = PasswordBuffer::new(self.length);

            while !password.is_full() {
                let c = choose(rng, &alphabet)?;
                if !self.charset.accepts(c, self.flags) {
                    continue;
                }
                password.push(c);

                if c.is_ascii_digit() {
                    remaining.remove(GeneratorFlags::DIGITS);
                } else if c.is_ascii_uppercase() {
                    remaining.remove(GeneratorFlags::UPPERS);
                } else if self.charset.is_symbol(c) {
                    remaining.remove(GeneratorFlags::SYMBOLS);
                }
            }

            if remaining.is_empty() {
                tracing::debug!(
                    length = self.length,
                    attempts = attempts,
                    "random::generate",
                );
                return Ok(password.into_string());
            }

            tracing::trace!(
                remaining = ?remaining,
                attempts = attempts,
                "random::retry",
            );
        }
    }
}

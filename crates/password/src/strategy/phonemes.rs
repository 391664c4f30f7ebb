use super::{Generator, PasswordBuffer};
use crate::{
    alphabet::{CharacterSet, DIGITS},
    phonemes::PHONEMES,
    random::{chance, choose},
    Error, GeneratorFlags, PhonemeFlags, Result,
};
use rand::Rng;

/// Generator that assembles pronounceable passwords
/// from phonetic units.
///
/// Units alternate between consonant and vowel sounds.
/// Digits and symbols are inserted between units and the
/// first letter of a unit may be capitalized.
#[derive(Debug, Clone)]
pub struct PhonemeGenerator {
    flags: GeneratorFlags,
    length: usize,
    charset: CharacterSet,
}

impl PhonemeGenerator {
    /// Create a phonetic generator.
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

    /// Minimum length that can satisfy the requirements.
    ///
    /// Nothing is injected before the second unit, a digit
    /// restarts the first unit state and a digit and symbol
    /// never follow the same unit, so the shortest layouts
    /// are `u u d` and `u u s u d`.
    fn minimum_length(&self) -> usize {
        let injected = [GeneratorFlags::DIGITS, GeneratorFlags::SYMBOLS]
            .into_iter()
            .filter(|flag| self.flags.contains(*flag))
            .count();
        match injected {
            0 => 1,
            n => n * 2 + 1,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::ZeroLength);
        }
        if self.flags.excludes_vowels() {
            return Err(Error::PhonemesWithoutVowels);
        }
        if self.flags.contains(GeneratorFlags::SYMBOLS)
            && self.charset.symbols().is_empty()
        {
            return Err(Error::EmptyAlphabet("symbol"));
        }
        let required = self.minimum_length();
        if self.length < required {
            return Err(Error::LengthTooShort {
                length: self.length,
                required,
            });
        }
        Ok(())
    }

    /// Draw from `alphabet` until a character that is
    /// not excluded as ambiguous is found.
    fn draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        alphabet: &[char],
        name: &'static str,
    ) -> Result<char> {
        let excluded = |c: &char| {
            self.flags.excludes_ambiguous() && self.charset.is_ambiguous(*c)
        };
        if alphabet.iter().all(|c| excluded(c)) {
            return Err(Error::EmptyAlphabet(name));
        }
        loop {
            let c = choose(rng, alphabet)?;
            if !excluded(&c) {
                return Ok(c);
            }
        }
    }

    fn coin_class<R: Rng + ?Sized>(rng: &mut R) -> Result<PhonemeFlags> {
        Ok(if chance(rng, 5)? {
            PhonemeFlags::VOWEL
        } else {
            PhonemeFlags::CONSONANT
        })
    }

    /// Fill a password once, returning the password and
    /// the requirements that were never satisfied.
    fn fill<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        digits: &[char],
        symbols: &[char],
    ) -> Result<(PasswordBuffer, GeneratorFlags)> {
        let exclude_ambiguous = self.flags.excludes_ambiguous();
        let mut remaining = self.flags.requirements();
        let mut password = PasswordBuffer::new(self.length);
        let mut previous = PhonemeFlags::empty();
        let mut expected = Self::coin_class(rng)?;
        let mut first = true;

        while !password.is_full() {
            let unit = choose(rng, &PHONEMES[..])?;
            let flags = unit.flags();

            if !flags.contains(expected) {
                continue;
            }
            if first && flags.contains(PhonemeFlags::NOT_FIRST) {
                continue;
            }
            // No vowel diphthong straight after a vowel
            if previous.contains(PhonemeFlags::VOWEL)
                && flags.contains(PhonemeFlags::VOWEL | PhonemeFlags::DIPHTHONG)
            {
                continue;
            }
            if unit.len() > password.remaining() {
                continue;
            }
            if exclude_ambiguous && unit.is_ambiguous() {
                continue;
            }

            let mut fragment: Vec<char> = unit.text().chars().collect();
            let mut capitalized = false;
            if self.flags.contains(GeneratorFlags::UPPERS)
                && (first || flags.contains(PhonemeFlags::CONSONANT))
                && chance(rng, 2)?
            {
                let upper = fragment[0].to_ascii_uppercase();
                if !exclude_ambiguous || !self.charset.is_ambiguous(upper) {
                    fragment[0] = upper;
                    capitalized = true;
                }
            }

            if exclude_ambiguous
                && fragment.iter().any(|c| self.charset.is_ambiguous(*c))
            {
                continue;
            }

            password.extend(&fragment);
            if capitalized {
                remaining.remove(GeneratorFlags::UPPERS);
            }
            if password.is_full() {
                break;
            }

            if self.flags.contains(GeneratorFlags::DIGITS)
                && !first
                && chance(rng, 3)?
            {
                password.push(self.draw(rng, digits, "digit")?);
                remaining.remove(GeneratorFlags::DIGITS);
                first = true;
                previous = PhonemeFlags::empty();
                expected = Self::coin_class(rng)?;
                continue;
            }

            if self.flags.contains(GeneratorFlags::SYMBOLS)
                && !first
                && chance(rng, 2)?
            {
                password.push(self.draw(rng, symbols, "symbol")?);
                remaining.remove(GeneratorFlags::SYMBOLS);
            }

            expected = if expected == PhonemeFlags::CONSONANT {
                PhonemeFlags::VOWEL
            } else if previous.contains(PhonemeFlags::VOWEL)
                || flags.contains(PhonemeFlags::DIPHTHONG)
                || chance(rng, 7)?
            {
                PhonemeFlags::CONSONANT
            } else {
                PhonemeFlags::VOWEL
            };
            previous = flags;
            first = false;
        }

        Ok((password, remaining))
    }
}

impl Generator for PhonemeGenerator {
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
        self.validate()?;

        let digits: Vec<char> = DIGITS.chars().collect();
        let symbols: Vec<char> = self.charset.symbols().chars().collect();

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let (password, remaining) = self.fill(rng, &digits, &symbols)?;
            if remaining.is_empty() {
                tracing::debug!(
                    length = self.length,
                    attempts = attempts,
                    "phonemes::generate",
                );
                return Ok(password.into_string());
            }

            tracing::trace!(
                remaining = ?remaining,
                attempts = attempts,
                "phonemes::retry",
            );
        }
    }
}

//! Utility for generating random passwords.
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::{
    alphabet::CharacterSet, csprng, Generator, GeneratorFlags,
    PhonemeGenerator, RandomGenerator, Result,
};

/// Default password length.
pub const DEFAULT_LENGTH: usize = 8;

/// Passwords shorter than this are always fully random.
const PHONEMES_MIN_LENGTH: usize = 5;

/// Strategy used to generate a password.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Pronounceable passwords built from phonetic units.
    #[default]
    Phonemes,
    /// Independently sampled characters.
    Random,
}

/// Serializable options for password generation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    /// Length of the generated password.
    pub length: usize,
    /// Generate completely random, hard to memorize passwords.
    pub secure: bool,
    /// Include at least one digit.
    pub numerals: bool,
    /// Include at least one uppercase letter.
    pub capitalize: bool,
    /// Avoid characters that are easily confused when printed.
    pub ambiguous: bool,
    /// Avoid vowels and the digits that look like vowels.
    pub no_vowels: bool,
    /// Include at least one symbol.
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            secure: false,
            numerals: true,
            capitalize: true,
            ambiguous: false,
            no_vowels: false,
            symbols: false,
        }
    }
}

/// Generated password result.
#[derive(Debug)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// Strategy that generated the password.
    pub method: Method,
}

/// Options for password generation.
///
/// Boolean options are translated into [GeneratorFlags] and
/// the strategy is chosen from them; fully random passwords are
/// used when secure or no vowels is requested or the password
/// is too short to be pronounceable.
#[derive(Debug)]
pub struct PasswordGen {
    length: usize,
    flags: GeneratorFlags,
    secure: bool,
    charset: CharacterSet,
    last: Option<SecretString>,
}

impl Default for PasswordGen {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGen {
    /// Create a password generator with the default options.
    pub fn new() -> Self {
        Self::from_options(&Default::default())
    }

    /// Create a password generator from options.
    pub fn from_options(options: &PasswordOptions) -> Self {
        let generator = Self {
            length: DEFAULT_LENGTH,
            flags: GeneratorFlags::empty(),
            secure: false,
            charset: Default::default(),
            last: None,
        };
        // Length is applied last as it can drop requirements
        generator
            .secure(options.secure)
            .numerals(options.numerals)
            .capitalize(options.capitalize)
            .ambiguous(options.ambiguous)
            .no_vowels(options.no_vowels)
            .symbols(options.symbols)
            .length(options.length)
    }

    /// Create a generator for fully random passwords.
    pub fn new_secure(length: usize) -> Self {
        Self::new().secure(true).length(length)
    }

    /// Options for this generator.
    pub fn options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.length,
            secure: self.secure,
            numerals: self.has_numerals(),
            capitalize: self.has_capitalize(),
            ambiguous: self.has_ambiguous(),
            no_vowels: self.has_no_vowels(),
            symbols: self.has_symbols(),
        }
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flags passed to the generation strategy.
    pub fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    /// Strategy used to generate passwords.
    pub fn method(&self) -> Method {
        if self.secure
            || self.has_no_vowels()
            || self.length < PHONEMES_MIN_LENGTH
        {
            Method::Random
        } else {
            Method::Phonemes
        }
    }

    /// Whether fully random passwords were requested.
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Whether a digit is required.
    pub fn has_numerals(&self) -> bool {
        self.flags.contains(GeneratorFlags::DIGITS)
    }

    /// Whether an uppercase letter is required.
    pub fn has_capitalize(&self) -> bool {
        self.flags.contains(GeneratorFlags::UPPERS)
    }

    /// Whether ambiguous characters are excluded.
    pub fn has_ambiguous(&self) -> bool {
        self.flags.contains(GeneratorFlags::AMBIGUOUS)
    }

    /// Whether vowels are excluded.
    pub fn has_no_vowels(&self) -> bool {
        self.flags.contains(GeneratorFlags::NO_VOWELS)
    }

    /// Whether a symbol is required.
    pub fn has_symbols(&self) -> bool {
        self.flags.contains(GeneratorFlags::SYMBOLS)
    }

    /// Set the password length.
    ///
    /// A zero length reverts to the default length. Very short
    /// passwords cannot hold every class so uppercase letters
    /// are dropped at two characters or less and digits at
    /// one character.
    pub fn length(mut self, length: usize) -> Self {
        if length == 0 {
            self.length = DEFAULT_LENGTH;
            return self;
        }
        self.length = length;
        if length <= 2 {
            self = self.capitalize(false);
        }
        if length <= 1 {
            self = self.numerals(false);
        }
        self
    }

    /// Generate completely random, hard to memorize passwords.
    ///
    /// Implies digits and uppercase letters.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        if secure {
            self = self.numerals(true).capitalize(true);
        }
        self
    }

    /// Include at least one digit.
    pub fn numerals(self, numerals: bool) -> Self {
        self.flag(GeneratorFlags::DIGITS, numerals)
    }

    /// Include at least one uppercase letter.
    pub fn capitalize(self, capitalize: bool) -> Self {
        self.flag(GeneratorFlags::UPPERS, capitalize)
    }

    /// Avoid characters that are easily confused when printed
    /// such as `l` and `1` or `0` and `O`.
    pub fn ambiguous(self, ambiguous: bool) -> Self {
        self.flag(GeneratorFlags::AMBIGUOUS, ambiguous)
    }

    /// Avoid vowels and the digits that look like vowels.
    ///
    /// Implies fully random passwords with digits and
    /// uppercase letters.
    pub fn no_vowels(self, no_vowels: bool) -> Self {
        if no_vowels {
            self.flag(
                GeneratorFlags::NO_VOWELS
                    | GeneratorFlags::DIGITS
                    | GeneratorFlags::UPPERS,
                true,
            )
        } else {
            self.flag(GeneratorFlags::NO_VOWELS, false)
        }
    }

    /// Include at least one symbol.
    pub fn symbols(self, symbols: bool) -> Self {
        self.flag(GeneratorFlags::SYMBOLS, symbols)
    }

    /// Remove characters from the symbol alphabet.
    ///
    /// Nothing is removed unless every character is in
    /// the symbol alphabet.
    pub fn blacklist_symbols(&mut self, chars: &[char]) -> bool {
        self.charset.blacklist_symbols(chars)
    }

    /// Character classes passed to the generation strategy.
    pub fn charset(&self) -> &CharacterSet {
        &self.charset
    }

    fn flag(mut self, flag: GeneratorFlags, value: bool) -> Self {
        self.flags.set(flag, value);
        self
    }

    fn password_string(&self) -> Result<String> {
        let rng = &mut csprng();
        match self.method() {
            Method::Phonemes => PhonemeGenerator::new(self.flags, self.length)
                .with_charset(self.charset.clone())
                .generate_with(rng),
            Method::Random => RandomGenerator::new(self.flags, self.length)
                .with_charset(self.charset.clone())
                .generate_with(rng),
        }
    }

    /// Generate a random password.
    pub fn one(&self) -> Result<PasswordResult> {
        let method = self.method();
        tracing::debug!(
            method = ?method,
            length = self.length,
            flags = ?self.flags,
            "password_gen::one",
        );
        let password = self.password_string()?;
        Ok(PasswordResult {
            password: password.into(),
            method,
        })
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let mut results = Vec::new();
        for _ in 0..count {
            results.push(self.one()?);
        }
        Ok(results)
    }

    /// Generate a password and remember it as the last password.
    pub fn generate(&mut self) -> Result<&SecretString> {
        let result = self.one()?;
        Ok(self.last.insert(result.password))
    }

    /// Last generated password, generating one if none exists.
    pub fn password(&mut self) -> Result<&SecretString> {
        let password = match self.last.take() {
            Some(password) => password,
            None => self.one()?.password,
        };
        Ok(self.last.insert(password))
    }
}

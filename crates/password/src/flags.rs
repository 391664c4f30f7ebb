use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bit flags for password generation.
    ///
    /// `DIGITS`, `UPPERS` and `SYMBOLS` are requirements, the
    /// generated password contains at least one character from
    /// each requested class. `AMBIGUOUS` and `NO_VOWELS` are
    /// exclusions.
    #[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
    #[serde(transparent)]
    pub struct GeneratorFlags: u32 {
        /// Include at least one digit.
        const DIGITS            =        0b0000000000000001;
        /// Include at least one uppercase letter.
        const UPPERS            =        0b0000000000000010;
        /// Include at least one symbol.
        const SYMBOLS           =        0b0000000000000100;
        /// Exclude characters that are easily confused
        /// when printed, such as `l` and `1`.
        const AMBIGUOUS         =        0b0000000000001000;
        /// Exclude vowels and the digits that look like vowels.
        const NO_VOWELS         =        0b0000000000010000;
    }
}

impl GeneratorFlags {
    /// Flags that must be satisfied by a generated password.
    pub const REQUIRED: Self = Self::DIGITS
        .union(Self::UPPERS)
        .union(Self::SYMBOLS);

    /// Requirements in these flags.
    pub fn requirements(&self) -> Self {
        self.intersection(Self::REQUIRED)
    }

    /// Whether ambiguous characters are excluded.
    pub fn excludes_ambiguous(&self) -> bool {
        self.contains(Self::AMBIGUOUS)
    }

    /// Whether vowels are excluded.
    pub fn excludes_vowels(&self) -> bool {
        self.contains(Self::NO_VOWELS)
    }
}

bitflags! {
    /// Bit flags for a phonetic unit.
    #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct PhonemeFlags: u32 {
        /// Unit is a consonant sound.
        const CONSONANT         =        0b0000000000000001;
        /// Unit is a vowel sound.
        const VOWEL             =        0b0000000000000010;
        /// Unit is made of two letters.
        const DIPHTHONG         =        0b0000000000000100;
        /// Unit may not open a password or follow a digit.
        const NOT_FIRST         =        0b0000000000001000;
    }
}

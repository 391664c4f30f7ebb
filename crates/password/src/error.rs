use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a random range has a minimum
    /// greater than the maximum.
    #[error("invalid random range, minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// Error generated when a password of zero length is requested.
    #[error("password length must be greater than zero")]
    ZeroLength,

    /// Error generated when exclusions remove every candidate
    /// character from an alphabet.
    #[error("no {0} characters remain after exclusions")]
    EmptyAlphabet(&'static str),

    /// Error generated when the requested length cannot hold
    /// every required character class.
    #[error("password length {length} is too short, at least {required} characters are required")]
    LengthTooShort {
        /// Requested length.
        length: usize,
        /// Minimum length for the requested flags.
        required: usize,
    },

    /// Error generated when vowels are excluded from a
    /// phonetic password.
    #[error("phonetic passwords cannot be generated without vowels")]
    PhonemesWithoutVowels,
}

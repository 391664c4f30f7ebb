#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Pronounceable and random password generation.
//!
//! Two strategies are provided, both honouring the same
//! [GeneratorFlags]:
//!
//! * [PhonemeGenerator] assembles passwords from a table of
//!   phonetic units so the result is easier to remember.
//! * [RandomGenerator] samples every character independently
//!   from the enabled character classes.
//!
//! A password is only returned once every requested character
//! class is present; otherwise it is discarded and generated
//! again from scratch.
//!
//! Most callers want the [PasswordGen] builder which selects
//! the strategy from boolean options.
pub mod alphabet;
mod error;
mod flags;
pub mod generator;
pub mod phonemes;
pub mod random;
mod strategy;

pub use error::Error;
pub use flags::{GeneratorFlags, PhonemeFlags};
pub use generator::{Method, PasswordGen, PasswordOptions, PasswordResult};
pub use random::{random_int, SecureRandom};
pub use strategy::{Generator, PhonemeGenerator, RandomGenerator};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> SecureRandom {
    SecureRandom::new()
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

use super::{assert_classes, assert_no_vowels, assert_unambiguous, has_any};
use anyhow::Result;
use pwgen_password::{
    alphabet::{DIGITS, LOWERS, SYMBOLS, UPPERS},
    random_int, Error, Generator, GeneratorFlags, RandomGenerator,
    SecureRandom,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn random_exact_length() -> Result<()> {
    for length in [1, 2, 5, 8, 20, 64] {
        let generator = RandomGenerator::new(GeneratorFlags::empty(), length);
        let password = generator.generate()?;
        assert_eq!(length, password.chars().count());
        assert!(password.chars().all(|c| LOWERS.contains(c)));
    }
    Ok(())
}

#[test]
fn random_all_classes() -> Result<()> {
    crate::tests::init_tracing();
    let generator = RandomGenerator::new(GeneratorFlags::REQUIRED, 20);
    for _ in 0..20 {
        let password = generator.generate()?;
        assert_eq!(20, password.len());
        assert_classes(&password);
    }
    Ok(())
}

#[test]
fn random_unambiguous() -> Result<()> {
    let generator = RandomGenerator::new(
        GeneratorFlags::REQUIRED | GeneratorFlags::AMBIGUOUS,
        16,
    );
    for _ in 0..20 {
        let password = generator.generate()?;
        assert_classes(&password);
        assert_unambiguous(&password);
    }
    Ok(())
}

#[test]
fn random_no_vowels() -> Result<()> {
    let generator = RandomGenerator::new(
        GeneratorFlags::DIGITS
            | GeneratorFlags::UPPERS
            | GeneratorFlags::NO_VOWELS
            | GeneratorFlags::AMBIGUOUS,
        16,
    );
    for _ in 0..20 {
        let password = generator.generate()?;
        assert!(has_any(&password, DIGITS));
        assert!(has_any(&password, UPPERS));
        assert_no_vowels(&password);
        assert_unambiguous(&password);
    }
    Ok(())
}

#[test]
fn random_excludes_disabled_classes() -> Result<()> {
    let generator = RandomGenerator::new(GeneratorFlags::DIGITS, 32);
    let password = generator.generate()?;
    assert!(!has_any(&password, UPPERS));
    assert!(!has_any(&password, SYMBOLS));
    Ok(())
}

#[test]
fn random_blacklisted_symbols_unused() -> Result<()> {
    let mut generator = RandomGenerator::new(GeneratorFlags::SYMBOLS, 64);
    let keep = ['!'];
    let removed: Vec<char> =
        SYMBOLS.chars().filter(|c| !keep.contains(c)).collect();
    assert!(generator.blacklist_symbols(&removed));
    for _ in 0..10 {
        let password = generator.generate()?;
        assert!(password.contains('!'));
        assert!(!password.chars().any(|c| removed.contains(&c)));
    }
    Ok(())
}

#[test]
fn random_small_lengths_terminate() -> Result<()> {
    let generator = RandomGenerator::new(GeneratorFlags::DIGITS, 1);
    let password = generator.generate()?;
    assert!(has_any(&password, DIGITS));

    let generator = RandomGenerator::new(
        GeneratorFlags::DIGITS | GeneratorFlags::UPPERS,
        1,
    );
    assert!(matches!(
        generator.generate(),
        Err(Error::LengthTooShort { .. })
    ));
    Ok(())
}

#[test]
fn random_repeated_calls_are_independent() -> Result<()> {
    let generator = RandomGenerator::new(GeneratorFlags::REQUIRED, 24);
    let first = generator.generate()?;
    let second = generator.generate()?;
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn random_seeded_is_deterministic() -> Result<()> {
    let generator = RandomGenerator::new(GeneratorFlags::REQUIRED, 16);
    let a = generator.generate_with(&mut StdRng::seed_from_u64(1))?;
    let b = generator.generate_with(&mut StdRng::seed_from_u64(1))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn random_int_range() -> Result<()> {
    let rng = &mut SecureRandom::new();
    for _ in 0..100 {
        let value = random_int(rng, 0, 9)?;
        assert!(value <= 9);
    }
    assert!(matches!(
        random_int(rng, 10, 0),
        Err(Error::InvalidRange { min: 10, max: 0 })
    ));
    Ok(())
}

use pretty_assertions::assert_eq;
use pwgen_password::{
    alphabet::{AMBIGUOUS, SYMBOLS, VOWELS},
    Generator, GeneratorFlags, PhonemeGenerator, RandomGenerator,
};

#[test]
fn alphabet_exposed_by_generators() {
    let phonemes = PhonemeGenerator::new(GeneratorFlags::empty(), 8);
    let random = RandomGenerator::new(GeneratorFlags::empty(), 8);
    for (ambiguous, symbols, vowels) in [
        (phonemes.ambiguous(), phonemes.symbols(), phonemes.vowels()),
        (random.ambiguous(), random.symbols(), random.vowels()),
    ] {
        assert_eq!("B8G6I1l0OQDS5Z2", ambiguous);
        assert_eq!("!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~", symbols);
        assert_eq!("01aeiouyAEIOUY", vowels);
    }
    assert_eq!(AMBIGUOUS, phonemes.ambiguous());
    assert_eq!(SYMBOLS, phonemes.symbols());
    assert_eq!(VOWELS, phonemes.vowels());
}

#[test]
fn alphabet_blacklist_symbols() {
    let mut generator = PhonemeGenerator::new(GeneratorFlags::SYMBOLS, 8);
    assert!(generator.blacklist_symbols(&['@', '#', '$']));
    assert_eq!("!\"%&'()*+,-./:;<=>?[\\]^_`{|}~", generator.symbols());
}

#[test]
fn alphabet_blacklist_all_or_nothing() {
    let mut generator = RandomGenerator::new(GeneratorFlags::SYMBOLS, 8);
    assert!(!generator.blacklist_symbols(&['@', '#', 'x']));
    assert_eq!(SYMBOLS, generator.symbols());

    assert!(generator.blacklist_symbols(&['@']));
    assert!(!generator.blacklist_symbols(&['@', '#']));
    assert!(generator.symbols().contains('#'));
}

#[test]
fn alphabet_accessors() {
    let flags = GeneratorFlags::DIGITS | GeneratorFlags::AMBIGUOUS;
    let generator = RandomGenerator::new(flags, 12);
    assert_eq!(flags, generator.flags());
    assert_eq!(12, generator.len());
    assert!(!generator.is_empty());
}

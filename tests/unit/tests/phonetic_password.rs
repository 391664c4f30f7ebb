use pwgen_password::{
    phonemes::PHONEMES, Generator, GeneratorFlags, PhonemeFlags,
    PhonemeGenerator,
};

/// Split a lowercase password into table units, preferring
/// two letter units so diphthongs are not read as two vowels.
fn segment(password: &str) -> Option<Vec<&'static str>> {
    let mut units = Vec::new();
    let mut rest = password;
    while !rest.is_empty() {
        let unit = PHONEMES
            .iter()
            .filter(|u| rest.starts_with(u.text()))
            .max_by_key(|u| u.len())?;
        units.push(unit.text());
        rest = &rest[unit.len()..];
    }
    Some(units)
}

fn is_vowel(unit: &str) -> bool {
    PHONEMES
        .iter()
        .any(|u| u.text() == unit && u.flags().contains(PhonemeFlags::VOWEL))
}

#[test]
fn test_phonetic_password() {
    let generator = PhonemeGenerator::new(GeneratorFlags::empty(), 20);
    for _ in 0..100 {
        let password = generator.generate().unwrap();
        println!("{}", password);

        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));

        let units = segment(&password).unwrap();
        assert!(!units.is_empty());

        // Never more than two vowel letters in a row as vowel
        // diphthongs may not follow a vowel, the u in qu aside
        let letters: Vec<char> = password.replace("qu", "q").chars().collect();
        for window in letters.windows(3) {
            assert!(
                !window.iter().all(|c| "aeiou".contains(*c)),
                "{}",
                password
            );
        }

        // Consonants are always followed by a vowel
        for pair in units.windows(2) {
            if !is_vowel(pair[0]) {
                assert!(is_vowel(pair[1]), "{}", password);
            }
        }
    }
}

#[test]
fn test_phonetic_password_capitalized() {
    let generator = PhonemeGenerator::new(GeneratorFlags::UPPERS, 20);
    for _ in 0..100 {
        let password = generator.generate().unwrap();
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        let lower = password.to_ascii_lowercase();
        assert!(segment(&lower).is_some(), "{}", password);
    }
}

//! Integration tests for random identifier generation.

mod helpers;

use vaultkit::{Alphabet, RandomGenerator, random_id, random_id_named};

#[test]
fn test_length_and_charset_for_every_alphabet() {
    for alphabet in Alphabet::ALL {
        for length in [1, 6, 10, 15, 64, 257] {
            let id = random_id(length, alphabet).expect("generate");
            assert_eq!(id.chars().count(), length);
            helpers::assert_in_alphabet(&id, alphabet);
        }
    }
}

#[test]
fn test_zero_length_is_empty() {
    for alphabet in Alphabet::ALL {
        assert_eq!(random_id(0, alphabet).expect("generate"), "");
    }
    assert_eq!(random_id_named(0, "anything").expect("generate"), "");
}

#[test]
fn test_unknown_names_use_alphanum() {
    for name in ["hex", "ALPHANUM ", "", "0123456789abcdef"] {
        let id = random_id_named(200, name).expect("generate");
        assert_eq!(id.len(), 200);
        helpers::assert_in_alphabet(&id, Alphabet::AlphaNum);
    }
}

#[test]
fn test_known_names_select_preset() {
    let id = random_id_named(100, "number").expect("generate");
    helpers::assert_in_alphabet(&id, Alphabet::Number);

    let id = random_id_named(100, "alphanumnosim").expect("generate");
    helpers::assert_in_alphabet(&id, Alphabet::AlphaNumNoSimilar);
}

#[test]
fn test_every_character_eventually_appears() {
    // 10 000 draws over 10 digits; missing one has probability ~1e-450.
    let id = random_id(10_000, Alphabet::Number).expect("generate");
    for digit in Alphabet::Number.chars().chars() {
        assert!(id.contains(digit), "digit {digit} never drawn");
    }
}

#[test]
fn test_unbiased_generator_output_shape() {
    let mut generator = RandomGenerator::new().unbiased(true);
    for alphabet in Alphabet::ALL {
        let id = generator.generate(500, alphabet).expect("generate");
        assert_eq!(id.len(), 500);
        helpers::assert_in_alphabet(&id, alphabet);
    }
}

#[test]
fn test_generator_from_config_defaults() {
    let kit = helpers::TestKit::new();
    let alphabet = Alphabet::from_name(&kit.config.generator.default_alphabet);
    let id = RandomGenerator::from_config(&kit.config.generator)
        .generate(kit.config.generator.default_length, alphabet)
        .expect("generate");
    assert_eq!(id.len(), 16);
    helpers::assert_in_alphabet(&id, Alphabet::AlphaNum);
}

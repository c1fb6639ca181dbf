//! Integration tests for the validate-then-hash flow.

mod helpers;

use vaultkit::{ErrorKind, PasswordValidator, validate_password};

#[test]
fn test_reference_cases() {
    assert!(validate_password("Passw0rd1!", 8));
    assert!(!validate_password("password", 8));
    assert!(validate_password("Aa1!1224", 8));
    assert!(!validate_password("", 8));
    assert!(!validate_password("short", 8));
}

#[test]
fn test_any_whitespace_or_control_rejects() {
    let base = "Passw0rd1!";
    for bad in [' ', '\t', '\n', '\r', '\u{0000}', '\u{001B}', '\u{00A0}', '\u{2003}', '\u{3000}'] {
        for position in [0, 4, base.len()] {
            let mut candidate = base.to_string();
            candidate.insert(position, bad);
            assert!(
                !validate_password(&candidate, 8),
                "{candidate:?} should be rejected"
            );
        }
    }
}

#[test]
fn test_missing_class_rejects_regardless_of_length() {
    let long = "x".repeat(64);
    assert!(validate_password(&format!("A1!{long}"), 8));
    assert!(!validate_password(&format!("A1!{}", long.to_uppercase()), 8));
    assert!(!validate_password(&format!("1!{long}"), 8));
    assert!(!validate_password(&format!("A!{long}"), 8));
    assert!(!validate_password(&format!("A1{long}"), 8));
}

#[test]
fn test_validate_then_hash_then_verify() {
    let kit = helpers::TestKit::new();
    let validator = PasswordValidator::from_config(&kit.config.password);

    let password = "Corr3ct-Horse!";
    assert!(validator.validate(password));

    let stored = kit.hasher.hash_password(password).expect("hash");
    assert!(kit.hasher.verify_password(password, &stored));
    assert!(!kit.hasher.verify_password("Corr3ct-Horse?", &stored));
}

#[test]
fn test_hashes_are_salted() {
    let kit = helpers::TestKit::new();
    let first = kit.hasher.hash_password("Aa1!1224").expect("first");
    let second = kit.hasher.hash_password("Aa1!1224").expect("second");

    assert_ne!(first, second);
    assert!(kit.hasher.verify_password("Aa1!1224", &first));
    assert!(kit.hasher.verify_password("Aa1!1224", &second));
}

#[test]
fn test_verify_never_errors_on_garbage() {
    let kit = helpers::TestKit::new();
    for hash in ["", "$argon2id$", "$2b$10$abcdefghijklmnopqrstuv", "plaintext"] {
        assert!(!kit.hasher.verify_password("anything", hash));
    }
}

#[test]
fn test_hash_failure_is_surfaced() {
    let mut kit = helpers::TestKit::new();
    kit.config.password.max_password_bytes = 16;
    let hasher = vaultkit::PasswordHasher::from_config(&kit.config.password).expect("params");

    let err = hasher
        .hash_password("Aa1!aaaaaaaaaaaaaaaaaaaaa")
        .expect_err("too long");
    assert_eq!(err.kind, ErrorKind::Hashing);
}

#[test]
fn test_default_cost_round_trip() {
    let stored = vaultkit::hash_password("Def4ult!cost").expect("hash");
    assert!(stored.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
    assert!(vaultkit::verify_password("Def4ult!cost", &stored));
    assert!(!vaultkit::verify_password("Def4ult!cosT", &stored));
}

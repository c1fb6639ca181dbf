//! Shared test helpers for integration tests.
#![allow(dead_code)]

use vaultkit::{Alphabet, AppConfig, PasswordConfig, PasswordHasher};

/// Test context with cheap hashing parameters.
pub struct TestKit {
    /// Application config
    pub config: AppConfig,
    /// Hasher built from the config
    pub hasher: PasswordHasher,
}

impl TestKit {
    /// Create a context whose Argon2 cost is low enough for tests.
    pub fn new() -> Self {
        let config = AppConfig {
            password: PasswordConfig {
                hash_memory_kib: 64,
                hash_iterations: 1,
                ..PasswordConfig::default()
            },
            ..AppConfig::default()
        };
        let hasher = PasswordHasher::from_config(&config.password).expect("valid test params");
        Self { config, hasher }
    }
}

/// Assert that every character of `id` is drawn from `alphabet`.
pub fn assert_in_alphabet(id: &str, alphabet: Alphabet) {
    for c in id.chars() {
        assert!(alphabet.contains(c), "{c:?} is not in {alphabet}");
    }
}

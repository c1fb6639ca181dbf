//! VaultKit — secure identifiers, password policy and password hashing.
//!
//! Re-exports the workspace crates and offers one-call helpers for the
//! common cases:
//!
//! ```no_run
//! use vaultkit::{Alphabet, hash_password, random_id, validate_password, verify_password};
//!
//! let token = random_id(24, Alphabet::AlphaNumNoSimilar)?;
//! assert_eq!(token.len(), 24);
//!
//! if validate_password("Passw0rd1!", 8) {
//!     let stored = hash_password("Passw0rd1!")?;
//!     assert!(verify_password("Passw0rd1!", &stored));
//! }
//! # Ok::<(), vaultkit::AppError>(())
//! ```

pub use vaultkit_auth::password::{
    CharClass, PasswordHasher, PasswordReport, PasswordValidator, StrengthEstimate, estimate,
    validate_password,
};
pub use vaultkit_auth::random::{Alphabet, EntropySource, OsEntropy, RandomGenerator, random_id};
pub use vaultkit_core::config::{AppConfig, GeneratorConfig, PasswordConfig};
pub use vaultkit_core::error::{AppError, ErrorKind};
pub use vaultkit_core::result::AppResult;
pub use vaultkit_core::util::{formatted_time, into_box, into_shared};

/// Generates an identifier, resolving the alphabet by name.
///
/// Unknown names use [`Alphabet::AlphaNum`].
pub fn random_id_named(length: usize, alphabet: &str) -> AppResult<String> {
    RandomGenerator::new().generate_named(length, alphabet)
}

/// Hashes a password with the default Argon2id cost.
pub fn hash_password(password: &str) -> AppResult<String> {
    PasswordHasher::new().hash_password(password)
}

/// Verifies a password against a stored hash; any failure yields `false`.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHasher::new().verify_password(password, hash)
}

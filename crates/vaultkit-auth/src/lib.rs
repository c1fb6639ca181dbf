//! # vaultkit-auth
//!
//! Credential building blocks for VaultKit.
//!
//! ## Modules
//!
//! - `random` — secure random identifiers over named alphabets
//! - `password` — strength policy, Argon2id hashing, and zxcvbn estimates
//!
//! The pieces are independent. The usual flow is to validate a password,
//! then hash it, but nothing here couples the two.

pub mod password;
pub mod random;

pub use password::{PasswordHasher, PasswordReport, PasswordValidator, validate_password};
pub use random::{Alphabet, EntropySource, OsEntropy, RandomGenerator, random_id};

//! Secure random identifier generation.

pub mod alphabet;
pub mod entropy;
pub mod generator;

pub use alphabet::Alphabet;
pub use entropy::{EntropySource, OsEntropy};
pub use generator::{RandomGenerator, random_id};

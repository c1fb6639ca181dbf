//! Random identifier generation over a fixed alphabet.
//!
//! Each output character consumes one byte from the entropy source. By
//! default a byte `b` maps to `alphabet[b % len]`, which slightly favours
//! the first `256 % len` characters when `len` does not divide 256 (for the
//! 62-character alphanumeric set the first 8 characters are drawn with
//! probability 5/256 instead of 4/256). Enable
//! [`RandomGenerator::unbiased`] to reject those tail bytes instead.

use vaultkit_core::config::GeneratorConfig;
use vaultkit_core::result::AppResult;

use super::alphabet::Alphabet;
use super::entropy::{EntropySource, OsEntropy};

/// Generates random identifiers from an [`Alphabet`].
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator<E = OsEntropy> {
    /// Where random bytes come from.
    entropy: E,
    /// Reject bytes that would bias the modulo mapping.
    unbiased: bool,
}

impl RandomGenerator<OsEntropy> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an OS-backed generator using the configured sampling mode.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new().unbiased(config.unbiased)
    }
}

impl<E: EntropySource> RandomGenerator<E> {
    /// Creates a generator over a custom entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            unbiased: false,
        }
    }

    /// Switches between modulo mapping (`false`, the default) and rejection
    /// sampling (`true`).
    pub fn unbiased(mut self, unbiased: bool) -> Self {
        self.unbiased = unbiased;
        self
    }

    /// Returns `true` if rejection sampling is enabled.
    pub fn is_unbiased(&self) -> bool {
        self.unbiased
    }

    /// Generates a string of exactly `length` characters from `alphabet`.
    ///
    /// A zero length returns an empty string without touching the entropy
    /// source. Any entropy failure is returned as-is.
    pub fn generate(&mut self, length: usize, alphabet: Alphabet) -> AppResult<String> {
        if length == 0 {
            return Ok(String::new());
        }

        let dictionary = alphabet.as_bytes();
        if self.unbiased {
            self.generate_rejecting(length, dictionary)
        } else {
            self.generate_modulo(length, dictionary)
        }
    }

    /// Same as [`generate`](Self::generate) but resolves the alphabet by
    /// name, falling back to alphanumeric for unknown names.
    pub fn generate_named(&mut self, length: usize, alphabet: &str) -> AppResult<String> {
        self.generate(length, Alphabet::from_name(alphabet))
    }

    fn generate_modulo(&mut self, length: usize, dictionary: &[u8]) -> AppResult<String> {
        let mut bytes = vec![0u8; length];
        self.entropy.fill(&mut bytes)?;

        Ok(bytes
            .iter()
            .map(|&b| dictionary[b as usize % dictionary.len()] as char)
            .collect())
    }

    fn generate_rejecting(&mut self, length: usize, dictionary: &[u8]) -> AppResult<String> {
        // Largest multiple of the alphabet size that fits in a byte.
        let limit = 256 - (256 % dictionary.len());
        let mut out = String::with_capacity(length);
        let mut buf = vec![0u8; length];

        while out.len() < length {
            let wanted = length - out.len();
            let chunk = &mut buf[..wanted];
            self.entropy.fill(chunk)?;

            out.extend(
                chunk
                    .iter()
                    .filter(|&&b| (b as usize) < limit)
                    .take(wanted)
                    .map(|&b| dictionary[b as usize % dictionary.len()] as char),
            );
        }

        Ok(out)
    }
}

/// Generates a random identifier with the OS CSPRNG and modulo mapping.
pub fn random_id(length: usize, alphabet: Alphabet) -> AppResult<String> {
    RandomGenerator::new().generate(length, alphabet)
}

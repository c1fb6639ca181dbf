//! Cryptographically secure byte sources.

use argon2::password_hash::rand_core::{OsRng, RngCore};

use vaultkit_core::error::{AppError, ErrorKind};
use vaultkit_core::result::AppResult;

/// A source of unpredictable bytes.
///
/// Implementations must be cryptographically secure. A failing source
/// reports [`ErrorKind::EntropyUnavailable`] and never substitutes
/// weaker randomness.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> AppResult<()>;
}

/// The operating system CSPRNG (`getrandom`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> AppResult<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            AppError::with_source(
                ErrorKind::EntropyUnavailable,
                format!("OS entropy source failed: {e}"),
                e,
            )
        })
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill(&mut self, dest: &mut [u8]) -> AppResult<()> {
        (**self).fill(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).expect("fill a");
        OsEntropy.fill(&mut b).expect("fill b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_os_entropy_empty_buffer() {
        let mut empty: [u8; 0] = [];
        assert!(OsEntropy.fill(&mut empty).is_ok());
    }
}

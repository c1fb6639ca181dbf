//! Argon2id password hashing and verification.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString},
};

use vaultkit_core::config::PasswordConfig;
use vaultkit_core::error::{AppError, ErrorKind};
use vaultkit_core::result::AppResult;

use crate::random::{EntropySource, OsEntropy};

/// Salt length in bytes (the PHC recommended 16).
const SALT_LEN: usize = 16;

/// Handles password hashing and verification using Argon2id.
///
/// Hashes are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`) that
/// carry their own salt and cost, so verification needs nothing but the
/// stored string.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    max_password_bytes: usize,
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id cost.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            max_password_bytes: PasswordConfig::default().max_password_bytes,
        }
    }

    /// Creates a hasher with the configured cost parameters.
    pub fn from_config(config: &PasswordConfig) -> AppResult<Self> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            max_password_bytes: config.max_password_bytes,
        })
    }

    /// Hashes a plaintext password using Argon2id with a fresh random salt.
    ///
    /// Fails with [`ErrorKind::EntropyUnavailable`] if no salt can be drawn
    /// and [`ErrorKind::Hashing`] if the password is too long or Argon2
    /// rejects it.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        if password.len() > self.max_password_bytes {
            return Err(AppError::hashing(format!(
                "Password exceeds the maximum length of {} bytes",
                self.max_password_bytes
            )));
        }

        let mut salt_bytes = [0u8; SALT_LEN];
        OsEntropy.fill(&mut salt_bytes)?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
            AppError::with_source(ErrorKind::Hashing, format!("Salt encoding failed: {e}"), e)
        })?;

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Hashing,
                    format!("Password hashing failed: {e}"),
                    e,
                )
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not, and
    /// an error if the stored hash cannot be parsed or Argon2 fails.
    pub fn try_verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        if password.len() > self.max_password_bytes {
            return Ok(false);
        }

        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            AppError::with_source(
                ErrorKind::Hashing,
                format!("Invalid password hash format: {e}"),
                e,
            )
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Hashing,
                format!("Password verification failed: {e}"),
                e,
            )),
        }
    }

    /// Verifies a plaintext password against a stored hash, treating every
    /// failure as a mismatch.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        match self.try_verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(kind = %e.kind, "Password verification failed closed");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("PasswordHasher")
            .field("m_cost", &params.m_cost())
            .field("t_cost", &params.t_cost())
            .field("p_cost", &params.p_cost())
            .field("max_password_bytes", &self.max_password_bytes)
            .finish()
    }
}

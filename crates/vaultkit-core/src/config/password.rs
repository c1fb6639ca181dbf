//! Password policy and hashing configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Password strength policy and Argon2id work factor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordConfig {
    /// Minimum number of classified characters.
    #[serde(default = "default_min_length")]
    #[validate(range(min = 1))]
    pub min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    #[validate(range(min = 8))]
    pub hash_memory_kib: u32,
    /// Argon2 time cost (iterations).
    #[serde(default = "default_iterations")]
    #[validate(range(min = 1))]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_parallelism")]
    #[validate(range(min = 1, max = 16))]
    pub hash_parallelism: u32,
    /// Longest password, in bytes, the hasher accepts.
    #[serde(default = "default_max_password_bytes")]
    #[validate(range(min = 1))]
    pub max_password_bytes: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            hash_memory_kib: default_memory_kib(),
            hash_iterations: default_iterations(),
            hash_parallelism: default_parallelism(),
            max_password_bytes: default_max_password_bytes(),
        }
    }
}

fn default_min_length() -> usize {
    8
}

// OWASP baseline for Argon2id: m=19 MiB, t=2, p=1.
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_max_password_bytes() -> usize {
    4096
}

//! Random identifier generation configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Defaults applied when a caller does not pick an alphabet or length.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratorConfig {
    /// Alphabet preset name: `"number"`, `"alpha"`, `"alphanum"` or
    /// `"alphanumnosim"`. Unknown names resolve to `"alphanum"`.
    #[serde(default = "default_alphabet")]
    pub default_alphabet: String,
    /// Identifier length used when none is given.
    #[serde(default = "default_length")]
    #[validate(range(max = 4096))]
    pub default_length: usize,
    /// Use rejection sampling instead of modulo mapping.
    #[serde(default)]
    pub unbiased: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_alphabet: default_alphabet(),
            default_length: default_length(),
            unbiased: false,
        }
    }
}

fn default_alphabet() -> String {
    "alphanum".to_string()
}

fn default_length() -> usize {
    16
}

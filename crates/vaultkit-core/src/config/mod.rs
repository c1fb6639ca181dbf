//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate: an optional TOML file,
//! an optional environment overlay next to it, then `VAULTKIT__*`
//! environment variables. Every section has defaults, so an empty
//! configuration is valid.

pub mod generator;
pub mod logging;
pub mod password;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::generator::GeneratorConfig;
pub use self::logging::LoggingConfig;
pub use self::password::PasswordConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Random identifier generation settings.
    #[serde(default)]
    #[validate(nested)]
    pub generator: GeneratorConfig,
    /// Password policy and hashing settings.
    #[serde(default)]
    #[validate(nested)]
    pub password: PasswordConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file plus environment overrides.
    ///
    /// `path` may omit the extension. A sibling file named after `env`
    /// (e.g. `config/production.toml`) is merged on top when present,
    /// followed by environment variables such as
    /// `VAULTKIT__PASSWORD__MIN_LENGTH=12`.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let overlay = std::path::Path::new(path)
            .with_file_name(env)
            .to_string_lossy()
            .into_owned();

        tracing::debug!(path, overlay = %overlay, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix("VAULTKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate_all()?;
        Ok(config)
    }

    /// Run the `validator` rules over every section.
    pub fn validate_all(&self) -> Result<(), AppError> {
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.generator.default_alphabet, "alphanum");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist/vaultkit", "nowhere").expect("load");
        assert_eq!(config.generator.default_length, 16);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_zero_min_length_is_rejected() {
        let mut config = AppConfig::default();
        config.password.min_length = 0;
        let err = config.validate_all().expect_err("should fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn test_partial_toml_section() {
        let config: AppConfig = toml_config("[password]\nmin_length = 12\n");
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.password.hash_iterations, 2);
        assert_eq!(config.generator.default_length, 16);
    }

    fn toml_config(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize")
    }
}

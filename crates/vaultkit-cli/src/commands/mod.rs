//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod generate;
pub mod hash;
pub mod timestamp;
pub mod verify;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Exit code for a negative answer (weak password, hash mismatch).
pub const EXIT_REJECTED: u8 = 2;

/// VaultKit — secure identifiers, password policy and hashing
#[derive(Debug, Parser)]
#[command(name = "vaultkit", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay merged on top of the configuration file
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Abort blocking work (hashing, verification) after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate random identifiers
    Generate(generate::GenerateArgs),
    /// Check a password against the strength policy
    Check(check::CheckArgs),
    /// Hash a password with Argon2id
    Hash(hash::HashArgs),
    /// Verify a password against a stored hash
    Verify(verify::VerifyArgs),
    /// Print the current UTC time
    Timestamp(timestamp::TimestampArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<ExitCode, AppError> {
        match &self.command {
            Commands::Generate(args) => generate::execute(args, config, self.format).await,
            Commands::Check(args) => check::execute(args, config, self.format).await,
            Commands::Hash(args) => hash::execute(args, config, self.format, self.timeout_ms).await,
            Commands::Verify(args) => {
                verify::execute(args, config, self.format, self.timeout_ms).await
            }
            Commands::Timestamp(args) => timestamp::execute(args, self.format).await,
            Commands::Config(args) => config::execute(args, config, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path, env)
}

/// Helper: run CPU-bound or blocking work off the async runtime, optionally
/// bounded by a deadline.
///
/// The library itself has no timeouts; this is where the caller enforces one.
/// On timeout the blocking task keeps running to completion in the
/// background but its result is discarded.
pub async fn run_blocking<T, F>(timeout_ms: Option<u64>, task: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(task);

    let joined = match timeout_ms {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), handle)
            .await
            .map_err(|_| AppError::timeout(format!("Operation exceeded {} ms", ms)))?,
        None => handle.await,
    };

    joined.map_err(|e| AppError::internal(format!("Blocking task failed: {}", e)))?
}

/// Helper: take a secret from the command line or prompt for it
pub fn password_or_prompt(
    password: &Option<String>,
    prompt: &str,
    confirm: bool,
) -> Result<String, AppError> {
    if let Some(p) = password {
        return Ok(p.clone());
    }

    let mut input = dialoguer::Password::new().with_prompt(prompt);
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }
    input
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultkit_core::error::ErrorKind;

    #[test]
    fn test_cli_parses_global_options() {
        let cli = Cli::try_parse_from([
            "vaultkit",
            "--format",
            "json",
            "--timeout-ms",
            "250",
            "generate",
            "-l",
            "12",
        ])
        .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.timeout_ms, Some(250));
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[tokio::test]
    async fn test_run_blocking_returns_value() {
        let value = run_blocking(None, || Ok(21 * 2)).await.expect("value");
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_blocking_times_out() {
        let err = run_blocking(Some(10), || {
            std::thread::sleep(Duration::from_millis(500));
            Ok(())
        })
        .await
        .expect_err("should time out");
        assert_eq!(err.kind, ErrorKind::Timeout);
    }

    #[tokio::test]
    async fn test_run_blocking_propagates_task_error() {
        let err = run_blocking::<(), _>(Some(1_000), || Err(AppError::hashing("boom")))
            .await
            .expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::Hashing);
    }
}

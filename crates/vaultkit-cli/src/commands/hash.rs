//! Password hashing command.

use std::process::ExitCode;

use clap::Args;
use serde_json::json;

use crate::output::{self, OutputFormat};
use vaultkit_auth::password::{PasswordHasher, PasswordValidator};
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Arguments for the hash command
#[derive(Debug, Args)]
pub struct HashArgs {
    /// Password to hash (will prompt if not provided)
    pub password: Option<String>,
    /// Refuse to hash passwords that fail the strength policy
    #[arg(long)]
    pub enforce_policy: bool,
}

/// Execute the hash command
pub async fn execute(
    args: &HashArgs,
    config: &AppConfig,
    format: OutputFormat,
    timeout_ms: Option<u64>,
) -> Result<ExitCode, AppError> {
    let password = super::password_or_prompt(&args.password, "Password", true)?;

    if args.enforce_policy {
        let report = PasswordValidator::from_config(&config.password).check(&password);
        if !report.is_accepted() {
            output::print_error("Password does not meet the policy; not hashing");
            for violation in report.violations() {
                output::print_warning(&violation);
            }
            return Ok(ExitCode::from(super::EXIT_REJECTED));
        }
    }

    let hasher = PasswordHasher::from_config(&config.password)?;
    tracing::debug!(?hasher, "Hashing password");

    let hash = super::run_blocking(timeout_ms, move || hasher.hash_password(&password)).await?;

    match format {
        OutputFormat::Json => output::print_json(&json!({ "hash": hash }), "{}"),
        OutputFormat::Table => println!("{}", hash),
    }

    Ok(ExitCode::SUCCESS)
}

//! Password verification command.

use std::process::ExitCode;

use clap::Args;
use serde_json::json;

use crate::output::{self, OutputFormat};
use vaultkit_auth::password::PasswordHasher;
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Stored PHC hash string
    pub hash: String,
    /// Password to verify (will prompt if not provided)
    pub password: Option<String>,
}

/// Execute the verify command
pub async fn execute(
    args: &VerifyArgs,
    config: &AppConfig,
    format: OutputFormat,
    timeout_ms: Option<u64>,
) -> Result<ExitCode, AppError> {
    let password = super::password_or_prompt(&args.password, "Password", false)?;
    let hasher = PasswordHasher::from_config(&config.password)?;
    let hash = args.hash.clone();

    let matches =
        super::run_blocking(timeout_ms, move || Ok(hasher.verify_password(&password, &hash)))
            .await?;

    match format {
        OutputFormat::Json => output::print_json(&json!({ "matches": matches }), "{}"),
        OutputFormat::Table if matches => output::print_success("Password matches"),
        OutputFormat::Table => output::print_error("Password does not match"),
    }

    if matches {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(super::EXIT_REJECTED))
    }
}

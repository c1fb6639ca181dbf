//! Password policy check command.

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use vaultkit_auth::password::{PasswordReport, PasswordValidator, StrengthEstimate, estimate};
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Password to check (will prompt if not provided)
    pub password: Option<String>,
    /// Minimum number of characters (defaults to `password.min_length`)
    #[arg(short, long)]
    pub min_length: Option<usize>,
    /// Words an attacker may know (username, email), used for the strength estimate
    #[arg(short, long = "user-input")]
    pub user_inputs: Vec<String>,
}

/// Check result for JSON output
#[derive(Debug, Serialize)]
struct CheckOutput {
    accepted: bool,
    report: PasswordReport,
    violations: Vec<String>,
    strength: StrengthEstimate,
}

/// Execute the check command
pub async fn execute(
    args: &CheckArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    let password = super::password_or_prompt(&args.password, "Password", false)?;

    let validator = match args.min_length {
        Some(min) => PasswordValidator::new(min),
        None => PasswordValidator::from_config(&config.password),
    };

    let report = validator.check(&password);
    let user_inputs: Vec<&str> = args.user_inputs.iter().map(String::as_str).collect();
    let result = CheckOutput {
        accepted: report.is_accepted(),
        violations: report.violations(),
        strength: estimate(&password, &user_inputs),
        report,
    };

    match format {
        OutputFormat::Json => output::print_json(&result, "{}"),
        OutputFormat::Table => {
            if result.accepted {
                output::print_success("Password meets the policy");
            } else {
                output::print_error("Password does not meet the policy");
                for violation in &result.violations {
                    output::print_warning(violation);
                }
            }
            output::print_kv("Characters counted", &result.report.classified.to_string());
            output::print_kv("Minimum length", &result.report.min_length.to_string());
            output::print_kv("Strength score", &format!("{}/4", result.strength.score));
            output::print_kv(
                "Guesses (log10)",
                &format!("{:.1}", result.strength.guesses_log10),
            );
        }
    }

    if result.accepted {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(super::EXIT_REJECTED))
    }
}

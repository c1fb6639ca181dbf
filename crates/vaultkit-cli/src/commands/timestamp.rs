//! Timestamp command.

use std::process::ExitCode;

use clap::Args;
use serde_json::json;

use crate::output::{self, OutputFormat};
use vaultkit_core::error::AppError;
use vaultkit_core::util::time::formatted_time;

/// Arguments for the timestamp command
#[derive(Debug, Args)]
pub struct TimestampArgs {
    /// strftime-style format (defaults to %Y%m%d%H%M%S)
    #[arg(long)]
    pub format: Option<String>,
}

/// Execute the timestamp command
pub async fn execute(args: &TimestampArgs, format: OutputFormat) -> Result<ExitCode, AppError> {
    let now = formatted_time(args.format.as_deref());

    match format {
        OutputFormat::Json => output::print_json(&json!({ "timestamp": now }), "{}"),
        OutputFormat::Table => println!("{}", now),
    }

    Ok(ExitCode::SUCCESS)
}

//! VaultKit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod output;

use commands::Cli;
use vaultkit_core::config::LoggingConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match commands::load_config(&cli.config, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    match cli.execute(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(kind = %e.kind, "Command failed");
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing/logging. Logs go to stderr so stdout stays parseable.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

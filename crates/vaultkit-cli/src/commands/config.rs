//! Configuration management CLI commands.

use std::process::ExitCode;

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use vaultkit_auth::password::PasswordHasher;
use vaultkit_auth::random::Alphabet;
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration, including hash parameters
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config, "{}"),
            OutputFormat::Table => println!("{:#?}", config),
        },
        ConfigCommand::Validate => {
            config.validate_all()?;
            let hasher = PasswordHasher::from_config(&config.password)?;
            let alphabet = Alphabet::from_name(&config.generator.default_alphabet);

            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Default alphabet", alphabet.name());
            if !alphabet
                .name()
                .eq_ignore_ascii_case(config.generator.default_alphabet.trim())
            {
                output::print_warning(&format!(
                    "'{}' is not a preset name; '{}' will be used",
                    config.generator.default_alphabet, alphabet
                ));
            }
            output::print_kv("Default length", &config.generator.default_length.to_string());
            output::print_kv("Unbiased sampling", &config.generator.unbiased.to_string());
            output::print_kv("Password min length", &config.password.min_length.to_string());
            output::print_kv("Hasher", &format!("{:?}", hasher));
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(ExitCode::SUCCESS)
}

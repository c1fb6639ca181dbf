//! Random identifier generation command.

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use vaultkit_auth::random::{Alphabet, RandomGenerator};
use vaultkit_core::config::AppConfig;
use vaultkit_core::error::AppError;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Identifier length (defaults to `generator.default_length`)
    #[arg(short, long)]
    pub length: Option<usize>,
    /// Alphabet: number, alpha, alphanum or alphanumnosim (unknown names use alphanum)
    #[arg(short, long)]
    pub alphabet: Option<String>,
    /// How many identifiers to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
    /// Use rejection sampling for an exactly uniform distribution
    #[arg(long)]
    pub unbiased: bool,
}

/// Generated identifier row for display
#[derive(Debug, Serialize, Tabled)]
struct IdentifierRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Identifier")]
    id: String,
    #[tabled(rename = "Alphabet")]
    alphabet: String,
}

/// Execute the generate command
pub async fn execute(
    args: &GenerateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    let length = args.length.unwrap_or(config.generator.default_length);
    let alphabet = Alphabet::from_name(
        args.alphabet
            .as_deref()
            .unwrap_or(&config.generator.default_alphabet),
    );

    let mut generator = RandomGenerator::from_config(&config.generator);
    if args.unbiased {
        generator = generator.unbiased(true);
    }

    tracing::debug!(
        length,
        alphabet = %alphabet,
        count = args.count,
        unbiased = generator.is_unbiased(),
        "Generating identifiers"
    );

    let rows = (1..=args.count)
        .map(|index| {
            generator.generate(length, alphabet).map(|id| IdentifierRow {
                index,
                id,
                alphabet: alphabet.to_string(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    match format {
        OutputFormat::Table if rows.len() == 1 => println!("{}", rows[0].id),
        _ => output::print_list(&rows, format),
    }

    Ok(ExitCode::SUCCESS)
}

//! R8 CLI
//!
//! Command-line front end for the R8 helpers

use clap::{Parser, Subcommand, ValueEnum};
use r8_core::errors::ExError;
use r8_core::logging_facility::{self, Profile};
use r8_core::R8Config;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "r8")]
#[command(about = "R8 - audit diffs and number humanization", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit structured logs on stderr
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Group phone numbers into consecutive runs
    Phones(commands::phones::PhonesArgs),
    /// Diff two JSON objects field by field
    Diff(commands::diff::DiffArgs),
    /// Build an audit record from two JSON snapshots
    Audit(commands::audit::AuditArgs),
    /// Format a currency amount
    Currency(commands::currency::CurrencyArgs),
    /// Convert Persian and Arabic-Indic digits to ASCII
    Digits(commands::digits::DigitsArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<R8Config, ExError> {
    match path {
        Some(path) => R8Config::load(path).map_err(ExError::from),
        None => Ok(R8Config::default()),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = load_config(cli.config.as_ref())
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
        .and_then(|config| match cli.command {
            Commands::Phones(args) => commands::phones::execute(args),
            Commands::Diff(args) => commands::diff::execute(args, &config),
            Commands::Audit(args) => commands::audit::execute(args, &config),
            Commands::Currency(args) => commands::currency::execute(args, &config),
            Commands::Digits(args) => commands::digits::execute(args),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Diff command
//!
//! Usage: r8 diff --current <FILE> --original <FILE> [--exclude <FIELD>]...

use clap::Args;
use r8_core::audit::{diff_fields, EntrySnapshot, EntryState};
use r8_core::R8Config;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// JSON object with the current values
    #[arg(long)]
    pub current: PathBuf,

    /// JSON object with the original values
    #[arg(long)]
    pub original: PathBuf,

    /// Extra field to ignore (on top of the configured ones)
    #[arg(long)]
    pub exclude: Vec<String>,
}

/// Execute diff command
pub fn execute(args: DiffArgs, config: &R8Config) -> Result<(), Box<dyn std::error::Error>> {
    let current = super::read_values(&args.current)?;
    let original = super::read_values(&args.original)?;

    let mut excluded = config.audit.excluded_set();
    excluded.extend(args.exclude);

    let entry = EntrySnapshot::from_values("", EntryState::Modified, current, original);
    let changes = diff_fields(
        entry.field_names(),
        entry.current_values(),
        entry.original_values(),
        &excluded,
    );

    println!("{}", serde_json::to_string_pretty(&changes)?);
    Ok(())
}

//! Phones command
//!
//! Usage: r8 phones <NUMBER>... [--text]

use clap::Args;
use r8_core::errors::ExError;
use r8_core::humanize::group_phone_numbers;

#[derive(Debug, Args)]
pub struct PhonesArgs {
    /// Phone numbers, in any formatting
    pub numbers: Vec<String>,

    /// Print `label: a, b` lines instead of JSON
    #[arg(long)]
    pub text: bool,
}

/// Execute phones command
pub fn execute(args: PhonesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let groups = group_phone_numbers(&args.numbers).map_err(ExError::from)?;

    if args.text {
        for group in &groups {
            println!("{}: {}", group.label(), group.numbers().join(", "));
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    }

    Ok(())
}

//! Digits command
//!
//! Usage: r8 digits <TEXT>

use clap::Args;
use r8_core::humanize::UnicodeDigitsExt;

#[derive(Debug, Args)]
pub struct DigitsArgs {
    pub text: String,
}

pub fn execute(args: DigitsArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", args.text.to_ascii_digits());
    Ok(())
}

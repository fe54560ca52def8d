//! Currency command
//!
//! Usage: r8 currency <AMOUNT> [--words]

use clap::Args;
use r8_core::errors::ExError;
use r8_core::humanize::{currency_words, group_thousands};
use r8_core::R8Config;

#[derive(Debug, Args)]
pub struct CurrencyArgs {
    /// Amount as entered, e.g. `1,250,000` or `-999.5`
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Spell the amount with the configured unit words
    #[arg(long)]
    pub words: bool,
}

/// Execute currency command
pub fn execute(args: CurrencyArgs, config: &R8Config) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = if args.words {
        currency_words(&args.amount, &config.currency).map_err(ExError::from)?
    } else {
        group_thousands(&args.amount).unwrap_or_default()
    };

    println!("{}", rendered);
    Ok(())
}

use anyhow::Result;

use crate::cli::{EncodeArgs, YearArgs};
use crate::config::LuachConfig;

/// Run the `encode` subcommand: print a gematria numeral.
pub fn encode(args: &EncodeArgs, config: &LuachConfig) -> Result<()> {
    let punctuate = config.format.punctuation && !args.plain;
    println!("{}", luach_gematria::encode(args.value, punctuate));
    Ok(())
}

/// Run the `year` subcommand: print a Hebrew calendar year numeral.
pub fn year(args: &YearArgs, config: &LuachConfig) -> Result<()> {
    let numeral = if config.format.millennium_prefix && !args.bare {
        luach_gematria::year_numeral_with_prefix(args.year)
    } else {
        luach_gematria::year_numeral(args.year)
    };
    println!("{numeral}");
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Luach Hebrew date and numeral tool.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar date conversion and gematria numerals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: luach.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the Hebrew calendar.
    Convert(ConvertArgs),
    /// Encode a number in gematria notation.
    Encode(EncodeArgs),
    /// Encode a Hebrew calendar year numeral.
    Year(YearArgs),
    /// List the Hebrew month catalogue.
    Months,
    /// List the fixed day-of-month labels.
    Days,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date as YYYY-MM-DD (defaults to today).
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Value to encode (calendar usage stays below 1000).
    pub value: i32,

    /// Emit bare letters without geresh/gershayim punctuation.
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Hebrew calendar year, e.g. 5786.
    pub year: i32,

    /// Drop the ה' millennium prefix.
    #[arg(long)]
    pub bare: bool,
}

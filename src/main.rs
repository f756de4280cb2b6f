mod cli;
mod config;
mod convert_cmd;
mod encode_cmd;
mod logging;
mod tables;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match &cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Encode(args) => encode_cmd::encode(args, &config),
        Command::Year(args) => encode_cmd::year(args, &config),
        Command::Months => tables::months(),
        Command::Days => tables::days(),
    }
}

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

use luach_hebdate::{
    format_gregorian_hebrew, format_gregorian_short, gregorian_to_hebrew, weekday_name,
};

use crate::cli::ConvertArgs;
use crate::config::LuachConfig;

/// Run the `convert` subcommand: print the Hebrew form of a Gregorian date.
pub fn run(args: &ConvertArgs, config: &LuachConfig) -> Result<()> {
    let date = match &args.date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date {text:?}, expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };
    let year = date.year();
    let month = date.month() as u8;
    let day = date.day() as u8;
    info!(%date, "converting gregorian date");

    // A failed conversion degrades to a placeholder; it is not an error.
    match gregorian_to_hebrew(year, month, day) {
        Some(converted) => println!("{}", converted.formatted()),
        None => println!("(conversion unavailable)"),
    }

    if config.format.show_gregorian {
        if let Some(weekday) = weekday_name(year, month, day) {
            println!("יום {weekday}");
        }
        if let Some(short) = format_gregorian_short(year, month, day) {
            println!("{short}");
        }
        if let Some(long) = format_gregorian_hebrew(year, month, day) {
            println!("{long}");
        }
    }
    Ok(())
}

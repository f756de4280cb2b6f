use anyhow::Result;

/// Run the `months` subcommand: print the month catalogue with sort keys.
pub fn months() -> Result<()> {
    for month in luach_hebdate::months() {
        println!("{:>4}  {}", month.sort_key(), month.name());
    }
    Ok(())
}

/// Run the `days` subcommand: print the fixed day-of-month labels.
pub fn days() -> Result<()> {
    for (i, label) in luach_hebdate::day_labels().iter().enumerate() {
        println!("{:>2}  {label}", i + 1);
    }
    Ok(())
}

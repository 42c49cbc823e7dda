use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Proleptic Gregorian calendar arithmetic.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar arithmetic: day numbers, ISO weeks, Easter and date formatting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language code for weekday and month names (en, nb/no, nn, de, sv/se).
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Summarize a date: weekday, ISO week, day of year, day number.
    Show(ShowArgs),
    /// Add a signed number of days to a date.
    Add(AddArgs),
    /// Count the days from one date to another.
    Between(BetweenArgs),
    /// Print Easter Sunday of a year.
    Easter(EasterArgs),
    /// Print the ISO week of a date.
    Week(WeekArgs),
    /// Render a date through a %-token template.
    Format(FormatArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Date as YYYY-MM-DD (defaults to today, UTC).
    pub date: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Date as YYYY-MM-DD.
    pub date: String,

    /// Days to add; negative values go back in time.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// Start date as YYYY-MM-DD.
    pub from: String,

    /// End date as YYYY-MM-DD.
    pub to: String,
}

/// Arguments for the `easter` subcommand.
#[derive(clap::Args)]
pub struct EasterArgs {
    /// Year (defaults to the current year).
    pub year: Option<i32>,
}

/// Arguments for the `week` subcommand.
#[derive(clap::Args)]
pub struct WeekArgs {
    /// Date as YYYY-MM-DD (defaults to today, UTC).
    pub date: Option<String>,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Template, e.g. "%A %e. %B %Y". Defaults to the configured template.
    pub template: Option<String>,

    /// Date as YYYY-MM-DD (defaults to today, UTC).
    #[arg(short, long)]
    pub date: Option<String>,
}

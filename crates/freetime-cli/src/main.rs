//! `availability` CLI: find shared free time for a group of users.
//!
//! ## Usage
//!
//! ```sh
//! # Free time for Maggie and Joe, 13:00-21:00 on the reference days
//! availability Maggie,Joe
//!
//! # Custom work day, either flag form works
//! availability Maggie,Joe --start 9 --end=17
//!
//! # Other record files and days
//! availability Jordan --users data/users.json --events data/events.json --day 2021-07-08
//!
//! # Machine-readable output
//! availability Maggie --format json
//! ```
//!
//! The report goes to stdout. Diagnostics go to stderr and follow `RUST_LOG`
//! (default `warn`; `--verbose` forces `debug`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use freetime::config::{DEFAULT_WORK_END_HOUR, DEFAULT_WORK_START_HOUR};
use freetime::{
    find_availability, write_json_report, write_text_report, AvailabilityConfig, FreetimeError,
    RequestedNames, UserDirectory,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Find shared free time for a group of users"
)]
struct Cli {
    /// Comma-separated names of the users to search (e.g. Maggie,Joe,Jordan)
    names: Option<String>,

    /// Work-day start hour, 0-24
    #[arg(long, default_value_t = i64::from(DEFAULT_WORK_START_HOUR), allow_negative_numbers = true)]
    start: i64,

    /// Work-day end hour, 0-24
    #[arg(long, default_value_t = i64::from(DEFAULT_WORK_END_HOUR), allow_negative_numbers = true)]
    end: i64,

    /// Path to the users record file
    #[arg(long, env = "FREETIME_USERS", default_value = "users.json")]
    users: PathBuf,

    /// Path to the events record file
    #[arg(long, env = "FREETIME_EVENTS", default_value = "events.json")]
    events: PathBuf,

    /// Day to search (repeatable); defaults to 2021-07-05 through 2021-07-07
    #[arg(long = "day", value_name = "YYYY-MM-DD")]
    days: Vec<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Validate everything the user typed before touching any files.
    let names = cli.names.as_deref().ok_or(FreetimeError::NoNames)?;
    let requested = RequestedNames::parse(names)?;
    let config = AvailabilityConfig::new(requested, cli.start, cli.end)?.with_days(cli.days);

    let users = UserDirectory::load(&cli.users, &cli.events)
        .context("Failed to load user and event records")?;
    for name in users.check_requested(&config.requested)? {
        tracing::warn!(name, "no user with this name; every slot will read unavailable");
    }

    let days = find_availability(&config, &users);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            write_text_report(&mut out, &days).context("Failed to write report")?;
        }
        OutputFormat::Json => {
            write_json_report(&mut out, &days).context("Failed to write JSON report")?;
        }
    }
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use litcal::{EasterDate, LiturgicalCalendar, Options, output};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Write a US Catholic liturgical calendar as CSV, from the date of Easter.
///
/// Advent and Christmas are taken from the year before Easter.
#[derive(Parser, Debug, Clone)]
#[command(name = "litcal", version, about, long_about = None)]
struct Cli {
    /// Date of Easter, formatted YYYY-MM-DD.
    #[arg(long, value_name = "YYYY-MM-DD")]
    easter: EasterDate,

    /// Celebrate the Ascension on Thursday instead of transferring it to the
    /// Seventh Sunday of Easter.
    #[arg(short, long, action = ArgAction::SetTrue)]
    ascension_thursday: bool,

    /// CSV file to write (defaults to YYYY-yearX-liturgical-calendar.csv).
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    outfile: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let options = Options {
        ascension_thursday: cli.ascension_thursday,
    };
    let calendar = LiturgicalCalendar::build(cli.easter, options)
        .with_context(|| format!("failed to resolve the calendar for Easter {}", cli.easter))?;

    let path = cli
        .outfile
        .unwrap_or_else(|| PathBuf::from(output::default_filename(calendar.year())));
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    output::write_csv(&calendar, file)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), observances = calendar.len(), "calendar written");
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = build_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logging subscriber: {err}"))
}

fn build_filter() -> Result<EnvFilter> {
    let spec = env::var("LITCAL_LOG")
        .ok()
        .filter(|spec| !spec.trim().is_empty());
    if let Some(spec) = spec {
        return EnvFilter::try_new(spec).context("invalid LITCAL_LOG filter");
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new("warn").context("invalid default filter"),
    }
}

mod cmd;
mod data;
mod panel;
mod ui;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use data::parse_date;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "yearpick.log";

#[derive(Parser)]
#[command(name = "yearpick", about = "pick a year from a decade grid")]
struct Cli {
    /// Path to the data directory containing config and locale files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Date the panel opens on (YYYY-MM-DD); overrides settings.default_value
    #[arg(long, value_parser = parse_date)]
    value: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default config.yaml and locale.json
    Init,
    /// Print the year grid for a date without opening the interactive panel
    Grid {
        /// Date whose decade to show (YYYY-MM-DD); defaults to --value or the configured default
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Checked before the log file is created inside the directory.
    let needs_init = dir_needs_init(&data_dir);
    init_logging(&data_dir)?;

    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && needs_init {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(cli.value),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Grid { date }) => cmd::grid::run(date.or(cli.value)),
    }
}

/// The TUI owns stdout, so logs go to a file in the data directory.
/// Level comes from RUST_LOG (e.g. RUST_LOG=debug), default info.
fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create dir {}", dir.display()))?;
    let log_path = dir.join(LOG_FILE);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

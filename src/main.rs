use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use siklus::{logging, report, snapshot, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "siklus")]
#[command(about = "Cycle phase calendar and analysis from an exported snapshot")]
struct Cli {
    /// TOML file overriding engine thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the 42-cell month grid
    Calendar {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        year: i32,
        /// 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        /// Defaults to the local date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print phase, statistics, recommendations and alerts
    Analyze {
        #[arg(long)]
        data: PathBuf,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Re-export a snapshot with every default filled in
    Export {
        #[arg(long)]
        data: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine config");

    let output = match cli.command {
        Command::Calendar {
            data,
            year,
            month,
            today,
        } => {
            let data = load(&data)?;
            let today = today.unwrap_or_else(local_today);
            let response = report::calendar(&config, &data, year, month - 1, today)?;
            serde_json::to_string_pretty(&response)?
        }
        Command::Analyze { data, today } => {
            let data = load(&data)?;
            let today = today.unwrap_or_else(local_today);
            tracing::info!(%today, "analyzing snapshot");
            serde_json::to_string_pretty(&report::analyze(&config, &data, today))?
        }
        Command::Export { data, out } => {
            let data = load(&data)?;
            match out {
                Some(path) => {
                    snapshot::save(&path, &data)
                        .with_context(|| format!("writing snapshot {}", path.display()))?;
                    tracing::info!(path = %path.display(), "snapshot exported");
                    return Ok(());
                }
                None => snapshot::to_json(&data)?,
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<siklus::CycleData> {
    snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()))
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

//! SwasthBot: disease information lookup and symptom checker.
//!
//! Usage:
//!   swasth search malaria
//!   swasth check "fever, chills" headache
//!   swasth symptoms --filter pain
//!   swasth session
//!
//! Configuration is read from `--config`, or from `./swasth.toml` when that
//! flag is absent and the file exists; otherwise built-in defaults apply.
//! The dataset path comes from `--dataset`, then the `[dataset]` section of
//! the config, then `data/odisha_diseases.csv`. Workbooks (`.xlsx`, `.ods`,
//! ...) and CSV/TSV files are both accepted.

mod config;
mod error;
mod render;
mod session;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swasth_contracts::ObservedSymptoms;
use swasth_dataset::DatasetCache;

use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::error::CliResult;
use crate::session::Session;

// ── CLI definition ────────────────────────────────────────────────────────────

/// SwasthBot: disease info and symptom-based triage aid.
///
/// Informational only. Always consult a qualified clinician.
#[derive(Parser)]
#[command(
    name = "swasth",
    about = "Disease information lookup and symptom checker",
    long_about = "Looks up diseases by name and ranks candidate diseases for a set of\n\
                  observed symptoms, with a coarse Low / Medium / High risk estimate."
)]
struct Cli {
    /// TOML configuration file. Defaults to `./swasth.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disease dataset (CSV, TSV or workbook with a header row). Overrides the config file.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a disease by (part of) its name.
    Search {
        /// Name or name fragment; words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,
        /// Show every matching disease, not only the first.
        #[arg(long)]
        all: bool,
    },
    /// Rank diseases by observed symptoms.
    Check {
        /// Symptoms; each argument may itself be a comma-separated list.
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// List the symptoms present in the dataset.
    Symptoms {
        /// Only list symptoms containing this text.
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Start an interactive session on standard input.
    Session,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::resolve(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }
    if let Command::Search { all: true, .. } = cli.command {
        config.display.show_all_matches = true;
    }

    let cache = DatasetCache::spreadsheet();
    let session = Session::new(&cache, &config, cli.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        render::disclaimer(&mut out)?;
    }

    match cli.command {
        Command::Search { query, .. } => session.search(&mut out, &query.join(" "))?,
        Command::Check { symptoms } => {
            let observed = ObservedSymptoms::from_free_text(&symptoms.join(","));
            session.check(&mut out, &observed)?
        }
        Command::Symptoms { filter } => session.symptoms(&mut out, &filter)?,
        Command::Session => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}

//! Ableist language detector CLI.
//!
//! ```bash
//! # Human-readable report
//! decoder-cli detect --file job.txt
//!
//! # JSON matches, custom compiled lexicon
//! decoder-cli detect --file job.txt --lexicon lexicon.rkyv --json
//!
//! # Served-model payload
//! decoder-cli predict --payload request.json
//! ```

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decoder_lexicon::LexiconStore;
use decoder_matcher::{Detector, PredictRequest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "decoder-cli")]
#[command(version, about = "Find ableist language in job descriptions and suggest alternatives")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon to match against: `.json` or a compiled archive (built-in if omitted)
    #[arg(long, global = true, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Where model metadata is tracked
    #[arg(long, global = true, env = "DECODER_TRACKING_URI")]
    tracking_uri: Option<String>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report ableist language found in a text file
    Detect {
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Answer a served-model request: {"text" | "input_file", "properties"}
    Predict {
        #[arg(short, long, value_name = "FILE")]
        payload: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_detector(lexicon: Option<&Path>) -> Result<Detector> {
    let store = match lexicon {
        Some(path) => LexiconStore::from_path(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => LexiconStore::builtin().context("built-in lexicon is invalid")?,
    };
    Ok(Detector::with_lexicon(store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(uri) = &cli.tracking_uri {
        info!(tracking_uri = %uri, "model tracking");
    }

    let detector = load_detector(cli.lexicon.as_deref())?;
    debug!(?detector, "detector ready");

    match cli.command {
        Commands::Detect { file, json } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let matches = detector
                .find_ableist_language(&text)
                .with_context(|| format!("detection failed for {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print!("{}", report::render(&matches));
            }
        }
        Commands::Predict { payload } => {
            let body = fs::read_to_string(&payload)
                .with_context(|| format!("failed to read {}", payload.display()))?;
            let request = PredictRequest::from_json(&body)?;
            let response = detector.predict(&request)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! Score a batch of already-fetched headlines and print the summary.
//!
//! Usage:
//!   pulse --max-items 10 aapl_headlines.json
//!   pulse --format json headlines.csv

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use headline_pulse::{load_headlines, render_markdown};
use mood_owl_workspace::MoodOwl;
use sentiment_core::{logging, EngineConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(about = "Aggregate sentiment over a batch of news headlines")]
struct Args {
    /// Headline batch (.json array or .csv with title,link,published)
    file: PathBuf,

    /// Maximum headlines scored from the front of the batch
    #[arg(short, long)]
    max_items: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(max_items) = args.max_items {
        config.max_items = max_items;
    }
    logging::init(&config)?;

    let headlines = load_headlines(&args.file)
        .with_context(|| format!("failed to load headlines from {}", args.file.display()))?;
    let owl = MoodOwl::new(config)?;
    let summary = owl.pulse(&headlines);

    match args.format {
        OutputFormat::Markdown => print!("{}", render_markdown(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

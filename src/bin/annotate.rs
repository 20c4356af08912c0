//! Annotate text from a file or stdin at word, sentence and paragraph level.
//!
//! Usage:
//!   annotate --granularity sentence --format html notes.txt
//!   echo "I love this! I hate that." | annotate

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mood_owl_workspace::MoodOwl;
use sentiment_core::{logging, EngineConfig, Granularity};
use std::io::{self, Read};
use std::path::PathBuf;
use text_annotate::{render_report_html, render_report_plain};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "annotate")]
#[command(about = "Tag words, sentences and paragraphs with sentiment")]
struct Args {
    /// Text file to annotate; reads stdin when omitted
    file: Option<PathBuf>,

    /// Granularity to report, repeatable (defaults to the config's list)
    #[arg(short, long)]
    granularity: Vec<Granularity>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if !args.granularity.is_empty() {
        config.granularities = args.granularity.clone();
    }
    logging::init(&config)?;

    let text = read_input(args.file.as_ref())?;
    let owl = MoodOwl::new(config)?;
    let report = owl.annotate(&text);

    match args.format {
        OutputFormat::Plain => print!("{}", render_report_plain(&report)),
        OutputFormat::Html => print!("{}", render_report_html(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvfuse::{Document, ExtractError, ExtractionPipeline};

/// Consolidates résumé-like plain-text documents into one JSON profile.
///
/// Input files must already be decoded to plain text; binary formats are out
/// of scope for this tool.
#[derive(Parser)]
#[command(name = "cvfuse", version, about)]
struct Cli {
    /// Plain-text documents to process, in merge order.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Extract documents in parallel (merge order is preserved).
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Processing {} document(s)", cli.files.len());

    let documents: Vec<Result<Document, ExtractError>> = cli
        .files
        .iter()
        .map(|path| {
            let source = path.display().to_string();
            fs::read_to_string(path)
                .map(|text| Document::new(source.clone(), text))
                .map_err(|err| ExtractError::UnreadableDocument {
                    document: source,
                    reason: err.to_string(),
                })
        })
        .collect();

    let pipeline = ExtractionPipeline::new();
    let profile = if cli.parallel {
        pipeline.consolidate_parallel(documents)
    } else {
        pipeline.consolidate(documents)
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };
    println!("{json}");

    Ok(())
}

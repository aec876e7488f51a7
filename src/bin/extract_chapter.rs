//! Extract the main content of one HTML page and print it as JSON.
//!
//! Reads the page from a file, or from stdin when no file is given. Logs go
//! to stderr; set `RUST_LOG=chapter_extract=debug` to follow the strategy chain.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use chapter_extract::{dom, stats, ExtractionResult, ExtractorConfig};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "extract_chapter")]
#[command(about = "Extract the main chapter content from an HTML page")]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured strategy
    #[arg(short, long, value_name = "NAME")]
    strategy: Option<String>,

    /// Override the minimum content length
    #[arg(long, value_name = "CHARS")]
    min_length: Option<usize>,

    /// Include word count and reading time in the output
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    result: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<Stats>,
}

#[derive(Serialize)]
struct Stats {
    word_count: usize,
    reading_time_minutes: usize,
    images: Vec<String>,
}

#[derive(Serialize)]
struct Failure {
    error: String,
    warnings: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return fail(err.to_string(), Vec::new()),
    };

    let html = match read_input(cli.input.as_ref()) {
        Ok(html) => html,
        Err(err) => return fail(format!("failed to read input: {err}"), Vec::new()),
    };

    let extractor = match config.build_extractor() {
        Ok(extractor) => extractor,
        Err(err) => return fail(err.to_string(), Vec::new()),
    };

    let doc = dom::parse_bytes(&html);
    match extractor.extract(&doc) {
        Ok(result) => {
            let stats = cli.stats.then(|| Stats {
                word_count: stats::word_count(&result.content),
                reading_time_minutes: stats::reading_time_minutes(&result.content),
                images: stats::image_sources(&result.content),
            });
            print_json(&Output { result, stats });
            ExitCode::SUCCESS
        }
        Err(failure) => fail(failure.error.to_string(), failure.warnings),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load_config(cli: &Cli) -> chapter_extract::Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };

    if let Some(strategy) = &cli.strategy {
        config.content_detection.strategy.clone_from(strategy);
        config.validate()?;
    }
    if let Some(min_length) = cli.min_length {
        config.extraction.min_content_length = min_length;
    }

    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn fail(error: String, warnings: Vec<String>) -> ExitCode {
    print_json(&Failure { error, warnings });
    ExitCode::FAILURE
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize output: {err}"),
    }
}

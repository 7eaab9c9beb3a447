use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pensieve::{Config, EmotionAnalyzer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "pensieve",
    about = "Extract emotion features and emotional arcs from text",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// JSON config overriding the built-in lexicon and tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the sentence-by-sentence progression
    #[arg(long)]
    no_progression: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let analyzer = match &cli.config {
        Some(path) => EmotionAnalyzer::from_config(Config::load(path)?)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => EmotionAnalyzer::default(),
    };
    let include_progression = !cli.no_progression;

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let report = analyzer.report(&input, include_progression);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("error reading {}", path.display()))?;
            info!(path = %path.display(), "analyzing");
            let report = analyzer.report(&text, include_progression);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

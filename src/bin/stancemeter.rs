//! stancemeter — stance analysis CLI
//!
//! Scores already-fetched posts from a JSON file or stdin.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stancemeter::{Analysis, Config, StanceAnalyzer, StanceError};
use tracing::debug;

/// Stancemeter CLI
#[derive(Parser)]
#[command(name = "stancemeter")]
#[command(version = stancemeter::PKG_VERSION)]
#[command(long_version = stancemeter::version_string())]
#[command(about = "Stance scoring for social media posts")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "STANCEMETER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a user's posts
    Analyze {
        /// JSON file of post records (or omit to read from stdin)
        file: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Include per-post scores in JSON output
        #[arg(long)]
        details: bool,
    },

    /// Score a single text
    Score {
        /// Text to score (or omit to read from stdin)
        text: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Summary,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    debug!(version = stancemeter::version_string(), "stancemeter starting");

    let config = Config::load_or_default(args.config.as_deref())?;
    let analyzer = StanceAnalyzer::builder().config_file(&config)?.build()?;

    match args.command {
        Command::Analyze {
            file,
            format,
            details,
        } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => read_stdin()?,
            };
            let analysis = analyzer.analyze_json(&input)?;
            print_analysis(&analysis, format, details)?;
        }

        Command::Score { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let score = analyzer.score_text(text.trim_end());
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
    }

    Ok(())
}

fn print_analysis(analysis: &Analysis, format: Format, details: bool) -> stancemeter::Result<()> {
    match format {
        Format::Json if details => {
            println!("{}", serde_json::to_string_pretty(analysis)?);
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis.result)?);
        }
        Format::Summary => {
            print!("{}", analysis.result);
            if analysis.rejected > 0 {
                println!("Rejected records: {}", analysis.rejected);
            }
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String, StanceError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

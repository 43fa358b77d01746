//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`setup_logging`] - `tracing` subscriber for the binary

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Analyze a WhatsApp chat export: message counts, busiest senders and
/// days, emoji and word usage, timelines and an hourly activity map.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscope chat.txt
    chatscope chat.txt --user Alice
    chatscope chat.txt --after 2024-01-01 --before 2024-06-30
    chatscope chat.txt -f json -o report.json
    chatscope chat.txt -f csv -o records.csv
    chatscope chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Analyze a single sender instead of the whole group
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Stop-word file replacing the built-in list
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Analysis settings (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the senders found in the export and exit
    #[arg(long)]
    pub list_users: bool,

    /// Log filter (error, warn, info, debug, trace); defaults to RUST_LOG or warn
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - readable report (default)
/// - [`Json`](OutputFormat::Json) - the full report as JSON
/// - [`Csv`](OutputFormat::Csv) - the filtered record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,

    /// JSON report
    Json,

    /// CSV record table with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `level` is an [`EnvFilter`] directive; without one, `RUST_LOG` is used,
/// then `warn`. An unparsable directive falls back to `warn`.
pub fn setup_logging(level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(log_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn log_filter(level: Option<&str>) -> EnvFilter {
    let directive = match level {
        Some(level) => level.to_lowercase(),
        None => std::env::var("RUST_LOG").unwrap_or_default(),
    };
    EnvFilter::try_new(directive.trim())
        .ok()
        .filter(|_| !directive.trim().is_empty())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatscope::ChatscopeError;
use chatscope::cli::{Args, OutputFormat, setup_logging};
use chatscope::config::AnalysisConfig;
use chatscope::core::filter::{FilterConfig, SenderSelection, apply_filters, filter_by_sender, senders};
use chatscope::core::output::{to_csv, to_json, to_text};
use chatscope::core::report::Analyzer;
use chatscope::parser::ChatParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level.as_deref());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatscopeError> {
    let start = Instant::now();

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(path) = &args.stop_words {
        config = config.with_stop_words_path(path);
    }

    let parser = ChatParser::new();
    let records = parser.parse(&args.input)?;
    info!(
        format = parser.name(),
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed {}",
        args.input.display()
    );

    // Date filter first, the sender selection is applied per format
    let mut filter_config = FilterConfig::new();
    if let Some(after) = &args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(before) = &args.before {
        filter_config = filter_config.with_date_to(before)?;
    }
    let records = apply_filters(records, &filter_config);
    info!(records = records.len(), "after date filter");

    if args.list_users {
        for name in senders(&records) {
            println!("{name}");
        }
        return Ok(());
    }

    let selection = args
        .user
        .as_deref()
        .map_or(SenderSelection::Overall, SenderSelection::from_choice);

    // Render
    let rendered = match args.format {
        OutputFormat::Csv => to_csv(&filter_by_sender(records, &selection))?,
        format => {
            let report = Analyzer::new(config)?.analyze(&records, &selection);
            if format == OutputFormat::Json {
                to_json(&report)?
            } else {
                to_text(&report)
            }
        }
    };

    // Write
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), format = %args.format, "report written");
        }
        None => print!("{rendered}"),
    }

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}

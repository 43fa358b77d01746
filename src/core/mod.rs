//! Filtering and aggregation over a parsed record table.
//!
//! This module contains:
//! - [`filter`] - Date-range and sender filters
//! - [`stats`] - Scalar counts (messages, words, media, links)
//! - [`breakdown`] - Ranked tables (weekdays, months, senders, emojis, words)
//! - [`timeline`] - Monthly/weekly/daily series and the hourly heatmap
//! - [`report`] - [`Analyzer`] bundling everything into a [`Report`]
//! - [`output`] - Format writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatscope::core::{Analyzer, FilterConfig, SenderSelection, apply_filters, to_text};
//! use chatscope::config::AnalysisConfig;
//! use chatscope::parser::parse_chat;
//!
//! # fn main() -> chatscope::Result<()> {
//! let records = parse_chat("1/2/24, 9:00 AM - Alice: hello")?;
//! let records = apply_filters(records, &FilterConfig::new().with_date_from("2024-01-01")?);
//! let report = Analyzer::new(AnalysisConfig::default())?.analyze(&records, &SenderSelection::Overall);
//! assert!(to_text(&report).contains("Total messages: 1"));
//! # Ok(())
//! # }
//! ```

pub mod breakdown;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;

// Re-export main types for convenience
pub use breakdown::{RankedCount, SenderBreakdown, SenderShare};
pub use filter::{FilterConfig, SenderSelection, apply_filters, filter_by_date, filter_by_sender};
pub use report::{Analyzer, Report};
pub use stats::{Summary, fetch_summary};
pub use timeline::{HeatmapRow, HourlyHeatmap, TimelinePoint};

// Conditionally re-export output writers
pub use output::to_text;
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};

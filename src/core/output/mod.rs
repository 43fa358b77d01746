//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`to_text`] - human-readable report, always available
//! - [`write_json`] / [`to_json`] - the report as JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - the record table, semicolon-delimited - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Content | Use Case |
//! |--------|---------|----------|
//! | Text | Report | Reading in a terminal |
//! | JSON | Report | Charts, dashboards, other tools |
//! | CSV | Records | Spreadsheets, custom analysis |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatscope::Result<()> {
//! use chatscope::config::AnalysisConfig;
//! use chatscope::core::filter::SenderSelection;
//! use chatscope::core::output::{to_text, write_csv, write_json};
//! use chatscope::core::report::Analyzer;
//! use chatscope::parser::ChatParser;
//!
//! let records = ChatParser::new().parse("chat.txt".as_ref())?;
//! let report = Analyzer::new(AnalysisConfig::default())?
//!     .analyze(&records, &SenderSelection::Overall);
//!
//! println!("{}", to_text(&report));
//! write_json(&report, "report.json")?;
//! write_csv(&records, "records.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::to_text;

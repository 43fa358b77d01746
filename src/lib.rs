//! # Chatscope
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! 1. **Parse** an exported `.txt` chat into [`MessageRecord`]s, each with
//!    derived calendar fields (month name, weekday, week of month, hour
//!    bucket).
//! 2. **Filter** the record table by an inclusive date range and a
//!    [`SenderSelection`](core::SenderSelection).
//! 3. **Aggregate** it into a [`Report`](core::Report): headline counts,
//!    ranked tables, time series and a weekday-by-hour heatmap.
//!
//! Parsing is all-or-nothing: an input without timestamped messages, or
//! with a timestamp that cannot exist, is rejected as a whole.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ChatParser::new().parse_str(
//!         "1/2/24, 9:00 AM - Alice: hello world\n\
//!          1/2/24, 9:05 AM - Bob: <Media omitted>\n\
//!          1/2/24, 9:10 AM - Group created",
//!     )?;
//!     assert_eq!(records.len(), 3);
//!
//!     let filter = FilterConfig::new().with_date_from("2024-01-01")?;
//!     let records = apply_filters(records, &filter);
//!
//!     let report = Analyzer::new(AnalysisConfig::default())?
//!         .analyze(&records, &SenderSelection::Overall);
//!
//!     assert_eq!(report.summary.messages, 2);
//!     assert_eq!(report.summary.media, 1);
//!     assert_eq!(report.monthly[0].label, "January-2024");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser) for WhatsApp TXT exports
//! - [`record`] - [`MessageRecord`] and calendar helpers
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - filters, aggregations, [`Report`](core::Report) and output writers
//! - [`text`] - emoji table, URL heuristic, stop words
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatscopeError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod record;
pub mod text;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscopeError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, parse_chat};

    // Configuration
    pub use crate::config::AnalysisConfig;

    // Filtering
    pub use crate::core::filter::{FilterConfig, SenderSelection, apply_filters};

    // Aggregation
    pub use crate::core::report::{Analyzer, Report};

    // Output
    pub use crate::core::output::to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}

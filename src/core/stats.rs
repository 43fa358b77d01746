//! Scalar statistics over a record table.

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;
use crate::text::LinkFinder;

/// Headline counts of a record table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-delimited tokens across all bodies.
    pub words: usize,
    /// Records whose body is exactly the media placeholder.
    pub media: usize,
    /// URL-like substrings across all bodies.
    pub links: usize,
}

impl Summary {
    /// Share of records that are media placeholders, in percent.
    pub fn media_ratio(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.media as f64 / self.messages as f64 * 100.0
    }
}

/// Computes the [`Summary`] of `records`.
///
/// # Example
///
/// ```
/// use chatscope::core::stats::fetch_summary;
/// use chatscope::parser::parse_chat;
/// use chatscope::text::LinkFinder;
///
/// # fn main() -> chatscope::Result<()> {
/// let records = parse_chat(
///     "1/2/24, 9:00 AM - Alice: see www.example.com\n\
///      1/2/24, 9:05 AM - Bob: <Media omitted>",
/// )?;
/// let summary = fetch_summary(&records, "<Media omitted>", &LinkFinder::new()?);
///
/// assert_eq!(summary.messages, 2);
/// assert_eq!(summary.words, 4);
/// assert_eq!(summary.media, 1);
/// assert_eq!(summary.links, 1);
/// # Ok(())
/// # }
/// ```
pub fn fetch_summary(records: &[MessageRecord], media_placeholder: &str, links: &LinkFinder) -> Summary {
    records.iter().fold(
        Summary {
            messages: records.len(),
            ..Summary::default()
        },
        |mut acc, r| {
            acc.words += r.word_count();
            if r.body == media_placeholder {
                acc.media += 1;
            }
            acc.links += links.count(&r.body);
            acc
        },
    )
}

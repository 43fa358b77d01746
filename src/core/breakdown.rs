//! Ranked frequency tables.
//!
//! Every ranking is sorted by descending count. Entries with equal counts
//! keep the order in which they first appeared in the record table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;
use crate::text::{StopWords, emojis};

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCount {
    pub label: String,
    pub count: usize,
}

impl RankedCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A sender's share of all records, in percent with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub name: String,
    pub percentage: f64,
}

/// Busiest senders with their shares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderBreakdown {
    pub counts: Vec<RankedCount>,
    pub shares: Vec<SenderShare>,
}

/// Counts `items` and ranks them, most frequent first.
pub fn rank<I, S>(items: I) -> Vec<RankedCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ranked: Vec<RankedCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = item.as_ref();
        match index.get(label) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(label.to_string(), ranked.len());
                ranked.push(RankedCount::new(label, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weekday ranking (uncapped).
pub fn busiest_weekdays(records: &[MessageRecord]) -> Vec<RankedCount> {
    rank(records.iter().map(|r| r.weekday.as_str()))
}

/// Month-name ranking, capped to `top`.
///
/// Months of different years share a name and are counted together.
pub fn busiest_months(records: &[MessageRecord], top: usize) -> Vec<RankedCount> {
    let mut ranked = rank(records.iter().map(|r| r.month_name.as_str()));
    ranked.truncate(top);
    ranked
}

/// Sender ranking capped to `top`, with each kept sender's share of the
/// whole table.
///
/// # Example
///
/// ```
/// use chatscope::core::breakdown::busiest_senders;
/// use chatscope::parser::parse_chat;
///
/// # fn main() -> chatscope::Result<()> {
/// let records = parse_chat(
///     "1/2/24, 9:00 AM - Alice: a\n\
///      1/2/24, 9:01 AM - Bob: b\n\
///      1/2/24, 9:02 AM - Alice: c",
/// )?;
/// let senders = busiest_senders(&records, 1);
///
/// assert_eq!(senders.counts.len(), 1);
/// assert_eq!(senders.counts[0].label, "Alice");
/// assert_eq!(senders.shares[0].percentage, 66.67);
/// # Ok(())
/// # }
/// ```
pub fn busiest_senders(records: &[MessageRecord], top: usize) -> SenderBreakdown {
    let total = records.len();
    let mut counts = rank(records.iter().map(|r| r.sender.as_str()));
    counts.truncate(top);

    let shares = counts
        .iter()
        .map(|c| SenderShare {
            name: c.label.clone(),
            percentage: round2(c.count as f64 / total as f64 * 100.0),
        })
        .collect();

    SenderBreakdown { counts, shares }
}

/// Emoji ranking over every character of every body, capped to `top`.
pub fn emoji_frequency(records: &[MessageRecord], top: usize) -> Vec<RankedCount> {
    let mut ranked = rank(
        records
            .iter()
            .flat_map(|r| emojis(&r.body))
            .map(String::from),
    );
    ranked.truncate(top);
    ranked
}

/// Text for word-cloud rendering.
///
/// Bodies of notifications and media placeholders are skipped; the rest
/// are lower-cased, stripped of stop words and joined with single spaces.
pub fn word_cloud_text(records: &[MessageRecord], stop_words: &StopWords, media_placeholder: &str) -> String {
    records
        .iter()
        .filter(|r| !r.is_notification() && r.body != media_placeholder)
        .map(|r| stop_words.strip(&r.body))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Most frequent tokens of a word-cloud text, capped to `top`.
pub fn word_frequencies(cloud_text: &str, top: usize) -> Vec<RankedCount> {
    let mut ranked = rank(cloud_text.split_whitespace());
    ranked.truncate(top);
    ranked
}

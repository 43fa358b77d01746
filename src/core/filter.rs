//! Filter records by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing a record table before aggregation.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after the start of a day |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before the end of a day |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Overall (no notifications) or one sender |
//!
//! # Example
//!
//! ```
//! use chatscope::core::filter::{FilterConfig, SenderSelection, apply_filters};
//! use chatscope::parser::parse_chat;
//!
//! # fn main() -> chatscope::Result<()> {
//! let records = parse_chat(
//!     "1/2/24, 9:00 AM - Alice: hi\n\
//!      2/3/24, 9:00 AM - Bob: hey\n\
//!      2/3/24, 9:05 AM - Bob left",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-02-01")?
//!     .with_sender(SenderSelection::Overall);
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].sender, "Bob");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive on both ends
//! - Sender matching is exact and case-sensitive
//! - The date filter runs before the sender filter; both keep record order

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChatscopeError;
use crate::record::MessageRecord;

/// Which senders an analysis covers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderSelection {
    /// Every individual sender; only notifications are dropped.
    #[default]
    Overall,
    /// Exactly one sender, matched case-sensitively.
    User(String),
}

impl SenderSelection {
    /// Label used by selection lists for [`SenderSelection::Overall`].
    pub const OVERALL_LABEL: &'static str = "Overall";

    /// Builds a selection from a presentation-layer choice, where
    /// `"Overall"` stands for every sender.
    pub fn from_choice(choice: &str) -> Self {
        if choice == Self::OVERALL_LABEL {
            Self::Overall
        } else {
            Self::User(choice.to_string())
        }
    }

    /// Returns `true` for [`SenderSelection::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Self::Overall)
    }

    /// Returns `true` if `record` belongs to this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Self::Overall => !record.is_notification(),
            Self::User(name) => record.sender == *name,
        }
    }
}

impl fmt::Display for SenderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => f.write_str(Self::OVERALL_LABEL),
            Self::User(name) => f.write_str(name),
        }
    }
}

/// Configuration for filtering records by date and sender.
///
/// Filters are combined with AND logic. With nothing set, every record
/// (notifications included) passes.
///
/// # Examples
///
/// ```
/// use chatscope::core::filter::FilterConfig;
///
/// # fn main() -> chatscope::Result<()> {
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// let by_sender = FilterConfig::new().with_user("Alice");
/// assert!(by_sender.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records at or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records at or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records of this selection.
    pub sender: Option<SenderSelection>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from 00:00 of that day).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatscopeError> {
        self.after = Some(start_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through the last instant of
    /// that day).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatscopeError> {
        self.before = Some(end_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Sets the sender selection.
    #[must_use]
    pub fn with_sender(mut self, selection: SenderSelection) -> Self {
        self.sender = Some(selection);
        self
    }

    /// Restricts to a single sender.
    #[must_use]
    pub fn with_user(self, name: impl Into<String>) -> Self {
        self.with_sender(SenderSelection::User(name.into()))
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.sender.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ChatscopeError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatscopeError::invalid_date(date_str))
}

/// 00:00:00 of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last representable instant of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date.succ_opt().unwrap_or(date)) - chrono::Duration::nanoseconds(1)
}

/// Keeps records with `start <= timestamp <= end`.
///
/// An absent bound leaves that side open.
pub fn filter_by_date(
    records: Vec<MessageRecord>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<MessageRecord> {
    if start.is_none() && end.is_none() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| start.is_none_or(|s| r.timestamp >= s))
        .filter(|r| end.is_none_or(|e| r.timestamp <= e))
        .collect()
}

/// Keeps records belonging to `selection`.
pub fn filter_by_sender(records: Vec<MessageRecord>, selection: &SenderSelection) -> Vec<MessageRecord> {
    records.into_iter().filter(|r| selection.matches(r)).collect()
}

/// Filters a record table with every active filter of `config`.
///
/// If no filters are active, returns the records unchanged.
///
/// # Examples
///
/// ```
/// use chatscope::core::filter::{FilterConfig, apply_filters};
/// use chatscope::parser::parse_chat;
///
/// # fn main() -> chatscope::Result<()> {
/// let records = parse_chat("1/2/24, 9:00 AM - Alice: hi\n1/2/24, 9:01 AM - Bob: yo")?;
/// let filtered = apply_filters(records, &FilterConfig::new().with_user("Bob"));
/// assert_eq!(filtered.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    let records = filter_by_date(records, config.after, config.before);
    match &config.sender {
        Some(selection) => filter_by_sender(records, selection),
        None => records,
    }
}

/// Earliest and latest timestamps of the table, or `None` if it is empty.
pub fn date_bounds(records: &[MessageRecord]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let min = records.iter().map(|r| r.timestamp).min()?;
    let max = records.iter().map(|r| r.timestamp).max()?;
    Some((min, max))
}

/// Sorted, de-duplicated individual senders (notifications excluded).
pub fn senders(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.is_notification())
        .map(|r| r.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GROUP_NOTIFICATION;

    fn at(date: &str, h: u32, m: u32) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn make(sender: &str, body: &str, date: &str, h: u32) -> MessageRecord {
        MessageRecord::new(at(date, h, 0), sender, body)
    }

    fn sample() -> Vec<MessageRecord> {
        vec![
            make("Alice", "Old", "2024-01-01", 9),
            make(GROUP_NOTIFICATION, "Bob joined", "2024-03-10", 8),
            make("Bob", "Mid", "2024-03-10", 12),
            make("alice", "Lower", "2024-03-11", 0),
            make("Alice", "New", "2024-06-15", 23),
        ]
    }

    fn bodies(records: &[MessageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.body.as_str()).collect()
    }

    // =========================================================================
    // Date filter
    // =========================================================================

    #[test]
    fn test_filter_by_date_inclusive() {
        let filtered = filter_by_date(
            sample(),
            Some(at("2024-03-10", 12, 0)),
            Some(at("2024-03-11", 0, 0)),
        );
        assert_eq!(bodies(&filtered), vec!["Mid", "Lower"]);
    }

    #[test]
    fn test_filter_by_full_range_is_identity() {
        let records = sample();
        let (min, max) = date_bounds(&records).unwrap();
        let filtered = filter_by_date(records.clone(), Some(min), Some(max));
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_date_to_covers_whole_day() {
        let config = FilterConfig::new().with_date_to("2024-06-15").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 5);

        let config = FilterConfig::new().with_date_to("2024-06-14").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_date_from_starts_at_midnight() {
        let config = FilterConfig::new().with_date_from("2024-03-11").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(bodies(&filtered), vec!["Lower", "New"]);
    }

    #[test]
    fn test_end_of_day() {
        let end = end_of_day(parse_date("2024-02-29").unwrap());
        assert_eq!(end.to_string(), "2024-02-29 23:59:59.999999999");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatscopeError::InvalidDate { .. })));
        assert!(FilterConfig::new().with_date_to("2024-13-01").is_err());
    }

    // =========================================================================
    // Sender filter
    // =========================================================================

    #[test]
    fn test_overall_drops_only_notifications() {
        let filtered = filter_by_sender(sample(), &SenderSelection::Overall);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|r| !r.is_notification()));
    }

    #[test]
    fn test_user_is_exact_match() {
        let filtered = filter_by_sender(sample(), &SenderSelection::User("Alice".into()));
        assert_eq!(bodies(&filtered), vec!["Old", "New"]);
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(SenderSelection::from_choice("Overall"), SenderSelection::Overall);
        assert_eq!(
            SenderSelection::from_choice("Bob"),
            SenderSelection::User("Bob".into())
        );
        assert_eq!(SenderSelection::User("Bob".into()).to_string(), "Bob");
        assert_eq!(SenderSelection::Overall.to_string(), "Overall");
    }

    // =========================================================================
    // Combined
    // =========================================================================

    #[test]
    fn test_combined_filters() {
        let config = FilterConfig::new()
            .with_date_from("2024-03-01")
            .unwrap()
            .with_user("Alice");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(bodies(&filtered), vec!["New"]);
    }

    #[test]
    fn test_inactive_config_keeps_everything() {
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(sample(), &config), sample());
    }

    #[test]
    fn test_with_datetime_directly() {
        let dt = at("2024-06-01", 0, 0);
        let config = FilterConfig::new().with_after(dt).with_before(dt);
        assert_eq!(config.after, Some(dt));
        assert_eq!(config.before, Some(dt));
        assert!(config.has_date_filter());
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn test_date_bounds() {
        let (min, max) = date_bounds(&sample()).unwrap();
        assert_eq!(min, at("2024-01-01", 9, 0));
        assert_eq!(max, at("2024-06-15", 23, 0));
        assert!(date_bounds(&[]).is_none());
    }

    #[test]
    fn test_senders_sorted_unique() {
        assert_eq!(senders(&sample()), vec!["Alice", "Bob", "alice"]);
    }
}

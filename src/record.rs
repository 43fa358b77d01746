//! Parsed chat record and its calendar fields.
//!
//! [`MessageRecord`] is one entry of the record table produced by the
//! parser. Besides the raw timestamp, sender and body it carries calendar
//! fields that are derived once at construction and never recomputed:
//!
//! | Field | Example | Rule |
//! |-------|---------|------|
//! | `year` | `2024` | calendar year |
//! | `month` / `month_name` | `1` / `"January"` | calendar month |
//! | `day` | `15` | day of month |
//! | `week_of_month` | `3` | `((day - 1) / 7) + 1` |
//! | `weekday` | `"Monday"` | full English weekday name |
//! | `hour` / `hour_range` | `23` / `"23-00"` | hour bucket, wraps at midnight |
//!
//! # Example
//!
//! ```
//! use chatscope::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(23, 5, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Hello");
//!
//! assert_eq!(record.month_name, "January");
//! assert_eq!(record.weekday, "Monday");
//! assert_eq!(record.week_of_month, 3);
//! assert_eq!(record.hour_range, "23-00");
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sender value for lines that carry no individual author
/// (group created, member added, encryption notice, ...).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body value WhatsApp writes in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single parsed chat line.
///
/// Construct with [`MessageRecord::new`]; the derived fields are public for
/// cheap read access but are only ever set there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as written in the export (no time zone).
    pub timestamp: NaiveDateTime,

    /// Author name, or [`GROUP_NOTIFICATION`].
    pub sender: String,

    /// Message text. May span several lines.
    pub body: String,

    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub day: u32,
    pub week_of_month: u32,
    pub weekday: String,
    pub hour: u32,
    pub hour_range: String,
}

impl MessageRecord {
    /// Creates a record and derives all calendar fields from `timestamp`.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        let day = timestamp.day();
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            year: timestamp.year(),
            month: timestamp.month(),
            month_name: month_name(timestamp.month()).to_string(),
            day,
            week_of_month: week_of_month(day),
            weekday: weekday_name(timestamp.weekday()).to_string(),
            hour: timestamp.hour(),
            hour_range: hour_range_label(timestamp.hour()),
        }
    }

    /// Creates a notification record (no individual sender).
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    /// Returns `true` for system/group notifications.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// English month name for a 1-based month number.
///
/// Out-of-range values yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday names in calendar order, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 1-indexed week of the month: days 1-7 are week 1, 8-14 week 2, ...
pub fn week_of_month(day: u32) -> u32 {
    day.saturating_sub(1) / 7 + 1
}

/// Hour bucket label, e.g. `9` → `"09-10"` and `23` → `"23-00"`.
pub fn hour_range_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// All 24 hour bucket labels in natural hour order.
pub fn hour_range_labels() -> Vec<String> {
    (0..24).map(hour_range_label).collect()
}

//! WhatsApp TXT export parser.
//!
//! Exports are split on their timestamp prefixes rather than on line
//! breaks, so a message that spans several lines stays one record.
//!
//! Supported prefix (Android/US 12-hour export):
//! - `1/15/24, 9:05 AM - Sender: Message`
//! - `1/15/24, 9:05AM - Sender: Message` (no space before the meridiem)
//!
//! A segment without a `Sender: ` part (group created, member added, ...)
//! becomes a notification record with [`GROUP_NOTIFICATION`] as its sender.
//!
//! Parsing is all-or-nothing: an input without any timestamp prefix, or
//! with a prefix whose date cannot exist, fails as a whole.
//!
//! [`GROUP_NOTIFICATION`]: crate::record::GROUP_NOTIFICATION

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::error::ChatscopeError;
use crate::record::MessageRecord;

/// Regex matching one timestamp prefix, including the ` - ` separator.
pub const TIMESTAMP_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2}, \d{1,2}:\d{2}\s?[AP]M - ";

/// chrono format of a normalized timestamp prefix.
const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %I:%M %p";

/// Separator between sender and body on the first line of a segment.
const SENDER_SEPARATOR: &str = ": ";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatscope::parser::ChatParser;
///
/// let text = "1/2/24, 9:00 AM - Alice: hello world\n\
///             1/2/24, 9:10 AM - Group created";
/// let records = ChatParser::new().parse_str(text)?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].sender, "Alice");
/// assert!(records[1].is_notification());
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatParser;

impl ChatParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Returns the name of the export format this parser reads.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Reads and parses an export file.
    ///
    /// The file must be valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>, ChatscopeError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|e| ChatscopeError::Utf8 {
            context: format!("reading {}", path.display()),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read chat export");
        self.parse_str(&content)
    }

    /// Parses export content from a string.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>, ChatscopeError> {
        let prefixes: Vec<regex::Match<'_>> = prefix_regex().find_iter(content).collect();
        if prefixes.is_empty() {
            return Err(ChatscopeError::NoMessages);
        }

        let mut records = Vec::with_capacity(prefixes.len());
        for (i, prefix) in prefixes.iter().enumerate() {
            // Text before the first prefix is dropped.
            let end = prefixes.get(i + 1).map_or(content.len(), |next| next.start());
            let segment = content[prefix.end()..end].trim_end_matches(['\n', '\r']);

            let timestamp = parse_timestamp(prefix.as_str())?;
            let record = match split_sender(segment) {
                Some((sender, body)) => MessageRecord::new(timestamp, sender, body),
                None => MessageRecord::notification(timestamp, segment),
            };
            records.push(record);
        }

        debug!(
            records = records.len(),
            notifications = records.iter().filter(|r| r.is_notification()).count(),
            "parsed chat export"
        );
        Ok(records)
    }
}

/// Compiled [`TIMESTAMP_PATTERN`], shared by every parser.
fn prefix_regex() -> &'static Regex {
    static PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    PREFIX_RE.get_or_init(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"))
}

/// Parses export content with a default [`ChatParser`].
pub fn parse_chat(content: &str) -> Result<Vec<MessageRecord>, ChatscopeError> {
    ChatParser::new().parse_str(content)
}

/// Parses a matched prefix such as `"1/2/24, 9:05 AM - "`.
///
/// The optional whitespace before the meridiem (a regular or narrow
/// no-break space, or nothing) is normalized to a single space first.
fn parse_timestamp(prefix: &str) -> Result<NaiveDateTime, ChatscopeError> {
    let raw = prefix.trim_end_matches(" - ");
    let invalid = || ChatscopeError::invalid_timestamp(raw);

    let split_at = raw.len().checked_sub(2).ok_or_else(invalid)?;
    if !raw.is_char_boundary(split_at) {
        return Err(invalid());
    }
    let (clock, meridiem) = raw.split_at(split_at);
    let normalized = format!("{} {}", clock.trim_end(), meridiem);

    NaiveDateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT).map_err(|_| invalid())
}

/// Splits a segment at the first `": "` of its first line.
fn split_sender(segment: &str) -> Option<(&str, &str)> {
    let first_line_end = segment.find('\n').unwrap_or(segment.len());
    let idx = segment[..first_line_end].find(SENDER_SEPARATOR)?;
    Some((&segment[..idx], &segment[idx + SENDER_SEPARATOR.len()..]))
}

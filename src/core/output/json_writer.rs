//! JSON output writer for reports.

use std::fs::File;
use std::io::Write;

use crate::core::report::Report;
use crate::error::ChatscopeError;

/// Writes a report to a JSON file.
pub fn write_json(report: &Report, output_path: &str) -> Result<(), ChatscopeError> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to pretty-printed JSON.
///
/// Same format as [`write_json`], but returns a String instead of writing
/// to a file.
pub fn to_json(report: &Report) -> Result<String, ChatscopeError> {
    Ok(serde_json::to_string_pretty(report)?)
}

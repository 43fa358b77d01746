//! CSV output writer for the record table.

use std::fs::File;
use std::io::Write;

use crate::error::ChatscopeError;
use crate::record::MessageRecord;

const HEADER: [&str; 11] = [
    "Timestamp",
    "Sender",
    "Body",
    "Year",
    "Month",
    "Day",
    "WeekOfMonth",
    "Weekday",
    "Hour",
    "HourRange",
    "Notification",
];

/// Writes records to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, then the calendar fields
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str) -> Result<(), ChatscopeError> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String, ChatscopeError> {
    let mut buf = Vec::new();
    write_records(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(records: &[MessageRecord], out: W) -> Result<(), ChatscopeError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(HEADER)?;

    for r in records {
        writer.write_record([
            r.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            r.sender.clone(),
            r.body.clone(),
            r.year.to_string(),
            r.month_name.clone(),
            r.day.to_string(),
            r.week_of_month.to_string(),
            r.weekday.clone(),
            r.hour.to_string(),
            r.hour_range.clone(),
            r.is_notification().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

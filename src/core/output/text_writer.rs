//! Plain-text report renderer.
//!
//! Empty sections are printed with an explicit "none found" line instead
//! of being left out, so an empty selection still reads as a report.

use std::fmt::Write;

use crate::core::breakdown::RankedCount;
use crate::core::report::Report;
use crate::core::timeline::{HourlyHeatmap, TimelinePoint};

const RULE: &str = "----------------------------------------";

/// Renders a report as human-readable text.
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Chat analysis: {}", report.selection);
    if let (Some(first), Some(last)) = (report.first_message, report.last_message) {
        let _ = writeln!(out, "Period: {} .. {}", first.format("%Y-%m-%d %H:%M"), last.format("%Y-%m-%d %H:%M"));
    }
    out.push_str(RULE);
    out.push('\n');

    let s = &report.summary;
    let _ = writeln!(out, "Total messages: {}", s.messages);
    let _ = writeln!(out, "Total words:    {}", s.words);
    let _ = writeln!(out, "Media shared:   {}", s.media);
    let _ = writeln!(out, "Links shared:   {}", s.links);

    if let Some(senders) = &report.senders {
        section(&mut out, "Most busy users");
        if senders.counts.is_empty() {
            out.push_str("No users found\n");
        }
        for (count, share) in senders.counts.iter().zip(&senders.shares) {
            let _ = writeln!(out, "{:<24} {:>6}  {:>6.2}%", count.label, count.count, share.percentage);
        }
    }

    section(&mut out, "Most busy days");
    ranking(&mut out, &report.busiest_weekdays, "No activity found");

    section(&mut out, "Most busy months");
    ranking(&mut out, &report.busiest_months, "No activity found");

    section(&mut out, "Emoji analysis");
    ranking(&mut out, &report.emojis, "No emojis found");

    section(&mut out, "Most common words");
    ranking(&mut out, &report.common_words, "No words found");

    section(&mut out, "Monthly timeline");
    series(&mut out, &report.monthly);

    section(&mut out, "Weekly timeline");
    series(&mut out, &report.weekly);

    section(&mut out, "Daily timeline");
    series(&mut out, &report.daily);

    section(&mut out, "Hourly activity");
    heatmap(&mut out, &report.heatmap);

    out
}

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "\n{title}\n{RULE}\n");
}

fn ranking(out: &mut String, rows: &[RankedCount], empty: &str) {
    if rows.is_empty() {
        out.push_str(empty);
        out.push('\n');
        return;
    }
    for row in rows {
        let _ = writeln!(out, "{:<24} {:>6}", row.label, row.count);
    }
}

fn series(out: &mut String, points: &[TimelinePoint]) {
    if points.is_empty() {
        out.push_str("No activity found\n");
        return;
    }
    for p in points {
        let _ = writeln!(out, "{:<24} {:>6}", p.label, p.count);
    }
}

fn heatmap(out: &mut String, map: &HourlyHeatmap) {
    if map.is_empty() {
        out.push_str("No activity found\n");
        return;
    }

    // columns are labeled by their starting hour to keep rows narrow
    let _ = write!(out, "{:<10}", "");
    for column in &map.columns {
        let _ = write!(out, "{:>4}", &column[..2]);
    }
    out.push('\n');

    for row in &map.rows {
        let _ = write!(out, "{:<10}", row.weekday);
        for count in &row.counts {
            let _ = write!(out, "{count:>4}");
        }
        out.push('\n');
    }
}

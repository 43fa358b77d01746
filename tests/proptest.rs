//! Property-based tests for chatscope.
//!
//! These tests generate random exports and record tables to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chatscope::MessageRecord;
use chatscope::core::breakdown::{busiest_senders, round2};
use chatscope::core::filter::{
    FilterConfig, SenderSelection, apply_filters, date_bounds, filter_by_sender,
};
use chatscope::core::timeline::{HourlyHeatmap, daily_timeline, monthly_timeline};
use chatscope::parser::parse_chat;
use chatscope::record::{GROUP_NOTIFICATION, hour_range_label};

const SENDERS: [&str; 5] = ["Alice", "Bob", "Иван", "+91 98765 43210", "User 🎉"];

const BODIES: [&str; 7] = [
    "Hello",
    "hi: there",
    "<Media omitted>",
    "😂😂 lol",
    "line one\nline two",
    "see https://example.com",
    "",
];

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2020i32..2026, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    })
}

/// A random record, notifications included
fn arb_record() -> impl Strategy<Value = MessageRecord> {
    (
        arb_timestamp(),
        prop::sample::select(vec!["Alice", "Bob", "Charlie", GROUP_NOTIFICATION]),
        prop::sample::select(BODIES.to_vec()),
    )
        .prop_map(|(ts, sender, body)| MessageRecord::new(ts, sender, body))
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<MessageRecord>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

/// Export lines as `(timestamp, sender, body)`
fn arb_export(max_len: usize) -> impl Strategy<Value = Vec<(NaiveDateTime, &'static str, &'static str)>> {
    prop::collection::vec(
        (
            arb_timestamp(),
            prop::sample::select(SENDERS.to_vec()),
            prop::sample::select(BODIES.to_vec()),
        ),
        1..max_len,
    )
}

fn render_export(lines: &[(NaiveDateTime, &str, &str)]) -> String {
    lines
        .iter()
        .map(|(ts, sender, body)| {
            format!("{} - {}: {}", ts.format("%-m/%-d/%y, %-I:%M %p"), sender, body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// One record per timestamped line
    #[test]
    fn parse_yields_one_record_per_stamp(lines in arb_export(30)) {
        let records = parse_chat(&render_export(&lines)).unwrap();
        prop_assert_eq!(records.len(), lines.len());
    }

    /// Senders, bodies and timestamps come back in file order
    #[test]
    fn parse_preserves_fields_and_order(lines in arb_export(30)) {
        let records = parse_chat(&render_export(&lines)).unwrap();
        for (record, (ts, sender, body)) in records.iter().zip(&lines) {
            prop_assert_eq!(record.timestamp, *ts);
            prop_assert_eq!(record.sender.as_str(), *sender);
            prop_assert_eq!(record.body.as_str(), *body);
        }
    }

    /// Derived calendar fields always agree with the timestamp
    #[test]
    fn derived_fields_are_consistent(record in arb_record()) {
        prop_assert_eq!(&record.hour_range, &hour_range_label(record.hour));
        prop_assert!(record.week_of_month >= 1 && record.week_of_month <= 5);
        prop_assert_eq!(record.week_of_month, (record.day - 1) / 7 + 1);
    }

    /// Arbitrary text either parses or errors, never panics
    #[test]
    fn parse_never_panics(text in "[0-9/:, APM\\-a-z\n]{0,80}") {
        let _ = parse_chat(&text);
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// A date filter spanning the whole table keeps everything
    #[test]
    fn full_range_filter_is_identity(records in arb_records(30)) {
        if let Some((min, max)) = date_bounds(&records) {
            let filter = FilterConfig::new().with_after(min).with_before(max);
            prop_assert_eq!(apply_filters(records.clone(), &filter), records);
        }
    }

    /// No filter is passthrough
    #[test]
    fn no_filter_is_passthrough(records in arb_records(30)) {
        prop_assert_eq!(apply_filters(records.clone(), &FilterConfig::new()), records);
    }

    /// Filtering keeps a subsequence of the input
    #[test]
    fn sender_filter_preserves_order(
        records in arb_records(30),
        name in prop::sample::select(vec!["Alice", "Bob", "Charlie"]),
    ) {
        let filtered = filter_by_sender(records.clone(), &SenderSelection::User(name.to_string()));
        prop_assert!(filtered.iter().all(|r| r.sender == name));

        let mut rest = records.iter();
        for kept in &filtered {
            prop_assert!(rest.any(|r| r == kept));
        }
    }

    /// Overall drops exactly the notifications
    #[test]
    fn overall_drops_notifications(records in arb_records(30)) {
        let expected = records.iter().filter(|r| r.sender != GROUP_NOTIFICATION).count();
        let filtered = filter_by_sender(records, &SenderSelection::Overall);
        prop_assert_eq!(filtered.len(), expected);
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Shares are rounded and never exceed the whole (up to rounding)
    #[test]
    fn sender_percentages_are_bounded(records in arb_records(40), top in 1usize..5) {
        if records.is_empty() {
            return Ok(());
        }
        let breakdown = busiest_senders(&records, top);
        let total = records.len() as f64;

        for (count, share) in breakdown.counts.iter().zip(&breakdown.shares) {
            prop_assert_eq!(share.percentage, round2(count.count as f64 / total * 100.0));
        }
        let sum: f64 = breakdown.shares.iter().map(|s| s.percentage).sum();
        prop_assert!(sum <= 100.0 + 0.005 * breakdown.shares.len() as f64);
        prop_assert!(breakdown.counts.len() <= top);
    }

    /// Every record lands in exactly one heatmap cell
    #[test]
    fn heatmap_total_matches_records(records in arb_records(40)) {
        let heatmap = HourlyHeatmap::from_records(&records);
        prop_assert_eq!(heatmap.total(), records.len());
        prop_assert!(heatmap.rows.iter().all(|r| r.counts.len() == 24));
    }

    /// Timelines partition the table
    #[test]
    fn timelines_sum_to_record_count(records in arb_records(40)) {
        let monthly: usize = monthly_timeline(&records).iter().map(|p| p.count).sum();
        let daily: usize = daily_timeline(&records).iter().map(|p| p.count).sum();
        prop_assert_eq!(monthly, records.len());
        prop_assert_eq!(daily, records.len());
    }
}

// ============================================
// DETERMINISTIC EDGE CASE TESTS
// ============================================

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn filter_empty_records() {
        let filtered = apply_filters(Vec::new(), &FilterConfig::new().with_user("Alice"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn heatmap_of_empty_table() {
        let heatmap = HourlyHeatmap::from_records(&[]);
        assert!(heatmap.is_empty());
        assert_eq!(heatmap.total(), 0);
    }

    #[test]
    fn twelve_am_is_hour_zero() {
        let records = parse_chat("3/4/24, 12:05 AM - Alice: late").unwrap();
        assert_eq!(records[0].hour, 0);
        assert_eq!(records[0].hour_range, "00-01");
    }
}

//! Time series and the weekday-by-hour heatmap.
//!
//! Series contain only the periods present in the data and are ordered
//! chronologically, not by label.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{MessageRecord, WEEKDAY_NAMES, hour_range_labels, month_name};

/// One period of a time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub label: String,
    pub count: usize,
}

fn count_by<K: Ord>(records: &[MessageRecord], key: impl Fn(&MessageRecord) -> K) -> BTreeMap<K, usize> {
    let mut groups = BTreeMap::new();
    for r in records {
        *groups.entry(key(r)).or_insert(0) += 1;
    }
    groups
}

/// Records per (year, month), labeled `"January-2024"`.
///
/// # Example
///
/// ```
/// use chatscope::core::timeline::monthly_timeline;
/// use chatscope::parser::parse_chat;
///
/// # fn main() -> chatscope::Result<()> {
/// let records = parse_chat(
///     "12/31/23, 11:00 PM - Alice: bye 2023\n\
///      1/1/24, 12:01 AM - Bob: hello 2024",
/// )?;
/// let months = monthly_timeline(&records);
///
/// assert_eq!(months[0].label, "December-2023");
/// assert_eq!(months[1].label, "January-2024");
/// # Ok(())
/// # }
/// ```
pub fn monthly_timeline(records: &[MessageRecord]) -> Vec<TimelinePoint> {
    count_by(records, |r| (r.year, r.month))
        .into_iter()
        .map(|((year, month), count)| TimelinePoint {
            label: format!("{}-{}", month_name(month), year),
            count,
        })
        .collect()
}

/// Records per (year, month, week of month), labeled `"2024-January-3"`.
pub fn weekly_timeline(records: &[MessageRecord]) -> Vec<TimelinePoint> {
    count_by(records, |r| (r.year, r.month, r.week_of_month))
        .into_iter()
        .map(|((year, month, week), count)| TimelinePoint {
            label: format!("{}-{}-{}", year, month_name(month), week),
            count,
        })
        .collect()
}

/// Records per calendar day, labeled `"2024-January-15"`.
pub fn daily_timeline(records: &[MessageRecord]) -> Vec<TimelinePoint> {
    count_by(records, |r| (r.year, r.month, r.day))
        .into_iter()
        .map(|((year, month, day), count)| TimelinePoint {
            label: format!("{}-{}-{}", year, month_name(month), day),
            count,
        })
        .collect()
}

/// One weekday row of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub weekday: String,
    pub counts: Vec<usize>,
}

/// Message counts by weekday (rows) and hour range (columns).
///
/// Columns are always the 24 hour ranges `"00-01"` through `"23-00"`.
/// Rows exist for the weekdays present in the data, Monday first, and
/// every hour without messages holds 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyHeatmap {
    pub columns: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl HourlyHeatmap {
    /// Builds the heatmap of `records`.
    pub fn from_records(records: &[MessageRecord]) -> Self {
        let mut cells: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for r in records {
            let Some(day) = WEEKDAY_NAMES.iter().position(|d| *d == r.weekday) else {
                continue;
            };
            let row = cells.entry(day).or_insert_with(|| vec![0; 24]);
            if let Some(cell) = row.get_mut(r.hour as usize) {
                *cell += 1;
            }
        }

        Self {
            columns: hour_range_labels(),
            rows: cells
                .into_iter()
                .map(|(day, counts)| HeatmapRow {
                    weekday: WEEKDAY_NAMES[day].to_string(),
                    counts,
                })
                .collect(),
        }
    }

    /// Count at `weekday` and `hour`; 0 when the weekday has no row.
    pub fn get(&self, weekday: &str, hour: u32) -> usize {
        self.rows
            .iter()
            .find(|row| row.weekday == weekday)
            .and_then(|row| row.counts.get(hour as usize).copied())
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.rows.iter().flat_map(|row| row.counts.iter()).sum()
    }

    /// Returns `true` if the heatmap has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Shorthand for [`HourlyHeatmap::from_records`].
pub fn activity_heatmap(records: &[MessageRecord]) -> HourlyHeatmap {
    HourlyHeatmap::from_records(records)
}

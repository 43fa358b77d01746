//! One analysis run over a filtered record table.
//!
//! [`Analyzer`] owns the resources every run needs (stop words, URL
//! matcher, caps) and turns a record table into a [`Report`].
//!
//! # Example
//!
//! ```
//! use chatscope::config::AnalysisConfig;
//! use chatscope::core::filter::SenderSelection;
//! use chatscope::core::report::Analyzer;
//! use chatscope::parser::parse_chat;
//!
//! # fn main() -> chatscope::Result<()> {
//! let records = parse_chat(
//!     "1/2/24, 9:00 AM - Alice: hello world 😂\n\
//!      1/2/24, 9:05 AM - Bob: <Media omitted>\n\
//!      1/2/24, 9:10 AM - Group created",
//! )?;
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default())?;
//! let report = analyzer.analyze(&records, &SenderSelection::Overall);
//!
//! assert_eq!(report.summary.messages, 2);
//! assert_eq!(report.summary.media, 1);
//! assert_eq!(report.emojis[0].label, "😂");
//! assert!(report.senders.is_some());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::core::breakdown::{
    RankedCount, SenderBreakdown, busiest_months, busiest_senders, busiest_weekdays, emoji_frequency,
    word_cloud_text, word_frequencies,
};
use crate::core::filter::{SenderSelection, date_bounds, filter_by_sender};
use crate::core::stats::{Summary, fetch_summary};
use crate::core::timeline::{HourlyHeatmap, TimelinePoint, daily_timeline, monthly_timeline, weekly_timeline};
use crate::error::ChatscopeError;
use crate::record::MessageRecord;
use crate::text::{LinkFinder, StopWords};

/// Everything the presentation layer shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"Overall"` or the selected sender's name.
    pub selection: String,
    /// Earliest and latest timestamps analyzed.
    pub first_message: Option<chrono::NaiveDateTime>,
    pub last_message: Option<chrono::NaiveDateTime>,
    pub summary: Summary,
    pub busiest_weekdays: Vec<RankedCount>,
    pub busiest_months: Vec<RankedCount>,
    /// Only present for the overall selection.
    pub senders: Option<SenderBreakdown>,
    pub emojis: Vec<RankedCount>,
    pub word_cloud: String,
    pub common_words: Vec<RankedCount>,
    pub monthly: Vec<TimelinePoint>,
    pub weekly: Vec<TimelinePoint>,
    pub daily: Vec<TimelinePoint>,
    pub heatmap: HourlyHeatmap,
}

impl Report {
    /// Returns `true` if no message matched the selection.
    pub fn is_empty(&self) -> bool {
        self.summary.messages == 0
    }
}

/// Runs the aggregations of a [`Report`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    stop_words: StopWords,
    links: LinkFinder,
}

impl Analyzer {
    /// Validates `config`, loads its stop-word list and compiles the URL
    /// matcher.
    pub fn new(config: AnalysisConfig) -> Result<Self, ChatscopeError> {
        config.validate()?;
        let stop_words = match &config.stop_words_path {
            Some(path) => StopWords::from_path(path)?,
            None => StopWords::builtin(),
        };
        debug!(stop_words = stop_words.len(), "analyzer ready");
        Ok(Self {
            config,
            stop_words,
            links: LinkFinder::new()?,
        })
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes `records` for `selection`.
    ///
    /// Notifications are always left out; a single-sender selection keeps
    /// only that sender's records. An empty selection yields an empty
    /// report, not an error.
    pub fn analyze(&self, records: &[MessageRecord], selection: &SenderSelection) -> Report {
        let selected = filter_by_sender(records.to_vec(), selection);
        info!(
            selection = %selection,
            records = selected.len(),
            "analyzing"
        );

        let cfg = &self.config;
        let summary = fetch_summary(&selected, &cfg.media_placeholder, &self.links);
        let word_cloud = word_cloud_text(&selected, &self.stop_words, &cfg.media_placeholder);
        let common_words = word_frequencies(&word_cloud, cfg.top_words);
        let bounds = date_bounds(&selected);

        Report {
            selection: selection.to_string(),
            first_message: bounds.map(|(first, _)| first),
            last_message: bounds.map(|(_, last)| last),
            summary,
            busiest_weekdays: busiest_weekdays(&selected),
            busiest_months: busiest_months(&selected, cfg.top_months),
            senders: selection
                .is_overall()
                .then(|| busiest_senders(&selected, cfg.top_senders)),
            emojis: emoji_frequency(&selected, cfg.top_emojis),
            word_cloud,
            common_words,
            monthly: monthly_timeline(&selected),
            weekly: weekly_timeline(&selected),
            daily: daily_timeline(&selected),
            heatmap: HourlyHeatmap::from_records(&selected),
        }
    }
}

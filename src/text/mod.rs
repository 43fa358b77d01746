//! Text helpers used by the aggregator.
//!
//! - [`emoji`] - emoji code-point table
//! - [`links`] - URL detection heuristic
//! - [`stopwords`] - stop-word list for word-cloud input

pub mod emoji;
pub mod links;
pub mod stopwords;

pub use emoji::{emojis, is_emoji};
pub use links::LinkFinder;
pub use stopwords::StopWords;

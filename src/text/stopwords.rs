//! Stop-word list for word-cloud input.
//!
//! The built-in list covers English and Hinglish (romanized Hindi, plus the
//! most common Devanagari function words). A replacement list is a plain
//! text file of whitespace-separated tokens; case does not matter.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ChatscopeError;

const BUILTIN: &str = include_str!("stop_hinglish.txt");

/// A set of lowercase tokens to drop from word-cloud text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English + Hinglish list.
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN)
    }

    /// Builds a list from whitespace-separated tokens.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a list from a file.
    pub fn from_path(path: &Path) -> Result<Self, ChatscopeError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if `word` (already lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lower-cases `text` and drops its stop words, joining the remaining
    /// tokens with single spaces.
    ///
    /// ```
    /// use chatscope::text::StopWords;
    ///
    /// let stop = StopWords::from_text("the a");
    /// assert_eq!(stop.strip("The Cat sat on A mat"), "cat sat on mat");
    /// ```
    pub fn strip(&self, text: &str) -> String {
        text.to_lowercase()
            .split_whitespace()
            .filter(|word| !self.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_both_languages() {
        let stop = StopWords::builtin();
        assert!(stop.len() > 200);
        assert!(stop.contains("the"));
        assert!(stop.contains("hai"));
        assert!(stop.contains("kya"));
        assert!(stop.contains("है"));
        assert!(!stop.contains("pizza"));
    }

    #[test]
    fn test_from_text_lowercases() {
        let stop = StopWords::from_text("The\nAND  Or");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert!(stop.contains("or"));
    }

    #[test]
    fn test_whole_token_membership() {
        // "a" is a stop word, but words containing it are not
        let stop = StopWords::from_text("a");
        assert_eq!(stop.strip("a banana and a apple"), "banana and apple");
    }

    #[test]
    fn test_strip_everything() {
        let stop = StopWords::from_text("hello world");
        assert_eq!(stop.strip("Hello WORLD"), "");
    }

    #[test]
    fn test_empty_list() {
        let stop = StopWords::default();
        assert!(stop.is_empty());
        assert_eq!(stop.strip("Keep  All"), "keep all");
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "foo bar").unwrap();
        let stop = StopWords::from_path(file.path()).unwrap();
        assert!(stop.contains("foo"));
        assert!(stop.contains("bar"));
    }

    #[test]
    fn test_from_missing_path() {
        let err = StopWords::from_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.is_io());
    }
}

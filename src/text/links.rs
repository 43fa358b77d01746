//! URL detection heuristic.
//!
//! Finds the URLs a reader would recognize in chat text, not only
//! RFC-conformant ones:
//!
//! - schemed URLs: `https://example.com/a?b=c`, `ftp://host/file`
//! - `www.` hosts: `www.example.com`
//! - bare domains with a well-known top-level domain: `example.org/page`
//!
//! Trailing sentence punctuation is not part of a URL, and the domain part
//! of an email address is not counted.

use regex::Regex;

use crate::error::ChatscopeError;

/// Top-level domains accepted for bare (scheme-less) domains.
const BARE_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "int", "info", "biz", "io", "co", "ai", "app",
    "dev", "me", "tv", "ly", "gl", "gg", "to", "xyz", "site", "online", "store", "tech", "blog",
    "in", "uk", "us", "ca", "au", "de", "fr", "es", "it", "nl", "be", "ch", "se", "no", "ru",
    "jp", "cn", "br", "pk", "bd", "np", "lk",
];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// Compiled URL matcher.
///
/// # Example
///
/// ```
/// use chatscope::text::LinkFinder;
///
/// let finder = LinkFinder::new()?;
/// let text = "see https://example.com/x, www.rust-lang.org and crates.io.";
/// assert_eq!(
///     finder.find_urls(text),
///     vec!["https://example.com/x", "www.rust-lang.org", "crates.io"]
/// );
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinkFinder {
    regex: Regex,
}

impl LinkFinder {
    /// Compiles the URL pattern.
    pub fn new() -> Result<Self, ChatscopeError> {
        let pattern = format!(
            r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"]+|\b(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:{})\b(?:[/?#][^\s<>"]*)?"#,
            BARE_TLDS.join("|")
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| ChatscopeError::invalid_config(format!("URL pattern: {e}")))?;
        Ok(Self { regex })
    }

    /// Returns every URL-like substring of `text`, in order.
    pub fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .find_iter(text)
            .filter(|m| !text[..m.start()].ends_with('@'))
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Number of URL-like substrings in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

//! Query matching against node values.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// How a query is matched against a node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match using nucleo-matcher.
    Fuzzy,
}

/// A query prepared for repeated matching.
///
/// An empty query matches everything in both modes.
///
/// # Example
///
/// ```
/// use formtree::{MatchMode, QueryMatcher};
///
/// let mut matcher = QueryMatcher::new("LEA", MatchMode::Substring);
/// assert!(matcher.matches("Leaf"));
/// assert!(!matcher.matches("Group"));
/// ```
pub struct QueryMatcher {
    needle: String,
    fuzzy: Option<FuzzyState>,
}

struct FuzzyState {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl QueryMatcher {
    /// Prepare `query` for matching in `mode`.
    pub fn new(query: &str, mode: MatchMode) -> Self {
        let fuzzy = match mode {
            MatchMode::Fuzzy if !query.is_empty() => Some(FuzzyState {
                matcher: Matcher::new(Config::DEFAULT),
                pattern: Pattern::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
                buf: Vec::new(),
            }),
            _ => None,
        };
        Self {
            needle: query.to_lowercase(),
            fuzzy,
        }
    }

    /// Check if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether `text` matches the query.
    pub fn matches(&mut self, text: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        match &mut self.fuzzy {
            Some(state) => {
                let haystack = Utf32Str::new(text, &mut state.buf);
                state.pattern.score(haystack, &mut state.matcher).is_some()
            }
            None => text.to_lowercase().contains(&self.needle),
        }
    }
}

impl std::fmt::Debug for QueryMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryMatcher")
            .field("needle", &self.needle)
            .field("fuzzy", &self.fuzzy.is_some())
            .finish()
    }
}

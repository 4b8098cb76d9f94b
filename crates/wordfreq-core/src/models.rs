//! Core data types for wordfreq.
//!
//! - [`WordCount`] - A distinct word and how often it occurred
//! - [`TieBreak`] - Ordering of words that share a count
//! - [`WriteMode`] - Whether the report replaces or extends the output file
//! - [`ReportOptions`] - Combined report writer configuration
//! - [`CountSummary`] - Totals describing one counting run

use serde::Serialize;

/// A normalized word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Ordering applied to words within the same count group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Order by word text, byte-wise.
    #[default]
    Lexicographic,
    /// Order by the position at which the word first appeared in the input.
    FirstSeen,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::Lexicographic => write!(f, "lexicographic"),
            TieBreak::FirstSeen => write!(f, "first-seen"),
        }
    }
}

/// How the report file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Create the file, or truncate it if it exists.
    #[default]
    Truncate,
    /// Create the file, or append to it if it exists.
    Append,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Truncate => write!(f, "truncate"),
            WriteMode::Append => write!(f, "append"),
        }
    }
}

/// Report writer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Order of words sharing a count.
    pub tie_break: TieBreak,
    /// Truncate or append to the output file.
    pub write_mode: WriteMode,
}

/// Totals for a single counting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    /// Number of whitespace-delimited tokens read.
    pub tokens: u64,
    /// Number of distinct normalized words, the empty word included.
    pub distinct_words: usize,
    /// Tokens made entirely of punctuation, counted under the empty word.
    pub empty_tokens: u64,
}

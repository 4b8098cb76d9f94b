//! Word counting.
//!
//! [`count_words`] reads a file once, splits it into whitespace-delimited
//! tokens, normalizes each token and tallies the results in a fresh
//! [`FrequencyTable`] owned by the caller.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WordFreqError};
use crate::models::{CountSummary, WordCount};
use crate::normalize::{normalize, tokenize};

/// Mapping from normalized word to occurrence count.
///
/// Entries are kept in first-seen order, with a side index for lookups.
/// The sum of all counts always equals the number of recorded tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of an already normalized word, returning its new count.
    pub fn record(&mut self, word: String) -> u64 {
        match self.index.get(&word) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.count += 1;
                entry.count
            }
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(WordCount { word, count: 1 });
                1
            }
        }
    }

    /// Occurrence count of `word`, zero if it was never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn summary(&self) -> CountSummary {
        CountSummary {
            tokens: self.total(),
            distinct_words: self.len(),
            empty_tokens: self.get(""),
        }
    }
}

/// Count the words of the file at `path`.
///
/// Fails with [`WordFreqError::InputNotFound`] if the path is missing, is a
/// directory or cannot be opened, and with [`WordFreqError::ReadFailure`] if
/// reading stops on an I/O error or invalid UTF-8.
pub fn count_words(path: impl AsRef<Path>) -> Result<FrequencyTable> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(WordFreqError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "Failed to open input");
        WordFreqError::InputNotFound(path.to_path_buf())
    })?;

    let table = count_reader(BufReader::new(file)).map_err(|source| {
        WordFreqError::ReadFailure {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        path = %path.display(),
        tokens = table.total(),
        distinct = table.len(),
        "Counted input"
    );

    Ok(table)
}

/// Count the words produced by any buffered reader.
///
/// Tokens never span lines, so the input is scanned one line at a time.
pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        for token in tokenize(&line) {
            table.record(normalize(token));
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn count_str(input: &str) -> FrequencyTable {
        count_reader(Cursor::new(input)).unwrap()
    }

    #[test]
    fn counts_case_and_punctuation_variants_together() {
        let table = count_str("Hello, hello, HELLO!");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("hello"), 3);
    }

    #[test]
    fn counts_repeated_words() {
        let table = count_str("a b a c b a");
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.get("d"), 0);
    }

    #[test]
    fn total_matches_token_count() {
        let input = "The cat -- the DOG.\n\tand \"the\" bird!\r\n... ok";
        let table = count_str(input);
        assert_eq!(table.total(), input.split_whitespace().count() as u64);
    }

    #[test]
    fn punctuation_only_tokens_count_under_empty_word() {
        let table = count_str("wait ... what -- !");
        assert_eq!(table.get(""), 3);
        assert_eq!(table.total(), 5);

        let summary = table.summary();
        assert_eq!(summary.tokens, 5);
        assert_eq!(summary.distinct_words, 3);
        assert_eq!(summary.empty_tokens, 3);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = count_str("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);

        let table = count_str("  \n\t\r\n ");
        assert!(table.is_empty());
    }

    #[test]
    fn iter_preserves_first_seen_order() {
        let table = count_str("zeta alpha zeta mid alpha");
        let words: Vec<&str> = table.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn record_returns_new_count() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.record("x".to_string()), 1);
        assert_eq!(table.record("x".to_string()), 2);
        assert_eq!(table.record("y".to_string()), 1);
    }

    #[test]
    fn count_words_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "One two\ntwo THREE three three\n").unwrap();

        let table = count_words(&path).unwrap();
        assert_eq!(table.get("one"), 1);
        assert_eq!(table.get("two"), 2);
        assert_eq!(table.get("three"), 3);
    }

    #[test]
    fn repeated_calls_do_not_share_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "hello hello").unwrap();

        let first = count_words(&path).unwrap();
        let second = count_words(&path).unwrap();
        assert_eq!(first.get("hello"), 2);
        assert_eq!(second.get("hello"), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = count_words(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WordFreqError::InputNotFound(_)));
    }

    #[test]
    fn directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = count_words(dir.path()).unwrap_err();
        assert!(matches!(err, WordFreqError::InputNotFound(_)));
    }

    #[test]
    fn invalid_utf8_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [b'o', b'k', b' ', 0xff, 0xfe, b'\n']).unwrap();

        let err = count_words(&path).unwrap_err();
        assert!(matches!(err, WordFreqError::ReadFailure { .. }));
    }
}

//! # wordfreq-core
//!
//! Word frequency counting for plain-text files.
//!
//! The library reads a text file, splits it on whitespace, normalizes each
//! token and writes a tab-separated report of every distinct word and its
//! count, ascending by count.
//!
//! ## Features
//!
//! - **Normalization**: ASCII and Unicode punctuation is stripped, then the
//!   remaining text is lowercased without regard to the process locale.
//! - **Deterministic output**: words sharing a count are ordered
//!   lexicographically, or in first-seen order on request.
//! - **Write modes**: the report replaces the output file by default and can
//!   append to it instead.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use wordfreq_core::prelude::*;
//!
//! let table = count_reader(Cursor::new("a b a c b a")).unwrap();
//! let report = build_report(&table, TieBreak::Lexicographic);
//!
//! for line in &report {
//!     println!("{}", format_line(line));
//! }
//! assert_eq!(report[0].word, "c");
//! ```

pub mod counter;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;

// Re-export commonly used types at the crate root
pub use counter::{FrequencyTable, count_reader, count_words};
pub use error::{Result, WordFreqError};
pub use models::{CountSummary, ReportOptions, TieBreak, WordCount, WriteMode};
pub use normalize::normalize;
pub use pipeline::convert;
pub use report::{build_report, write_report};

/// Prelude module for convenient imports.
///
/// ```
/// use wordfreq_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::counter::{FrequencyTable, count_reader, count_words};
    pub use crate::error::{Result, WordFreqError};
    pub use crate::models::*;
    pub use crate::normalize::{normalize, tokenize};
    pub use crate::pipeline::convert;
    pub use crate::report::{build_report, format_line, group_by_count, write_lines, write_report};
}

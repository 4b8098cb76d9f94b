//! Error types for wordfreq-core.
//!
//! Every failure is terminal for the run: nothing here is retried or
//! recovered internally, each variant is handed straight to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wordfreq operations.
#[derive(Debug, Error)]
pub enum WordFreqError {
    /// The argument list did not hold exactly an input and an output path.
    #[error("Invalid count args: {0}, count args must be 2")]
    InvalidArgumentCount(usize),

    /// Input path is missing, is a directory, or could not be opened.
    #[error("Can't open input file: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input was opened but reading it failed part way through.
    #[error("Can't read from input file: {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be created, opened or written.
    #[error("Can't open output file: {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for wordfreq operations.
pub type Result<T> = std::result::Result<T, WordFreqError>;

use std::path::{Path, PathBuf};

use wordfreq_core::{TieBreak, WordFreqError, WriteMode};

use crate::error::{CliError, CliResult};

const VALID_COUNT_ARGS: usize = 2;

/// Split the positional arguments into input and output paths.
///
/// Only the argument count is checked here; the input path itself is checked
/// when it is opened.
pub fn validate_paths(paths: &[PathBuf]) -> CliResult<(&Path, &Path)> {
    if paths.len() != VALID_COUNT_ARGS {
        return Err(WordFreqError::InvalidArgumentCount(paths.len()).into());
    }
    Ok((paths[0].as_path(), paths[1].as_path()))
}

pub fn parse_tie_break(s: &str) -> CliResult<TieBreak> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "lexicographic" => Ok(TieBreak::Lexicographic),
        "first-seen" => Ok(TieBreak::FirstSeen),
        _ => Err(CliError::input(format!(
            "Invalid tie_break '{}'. Expected: lexicographic, first-seen",
            s
        ))),
    }
}

pub fn write_mode(append: bool) -> WriteMode {
    if append {
        WriteMode::Append
    } else {
        WriteMode::Truncate
    }
}

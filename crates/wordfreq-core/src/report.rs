//! Report building and writing.
//!
//! A report lists every distinct word as `word<TAB>count`, one per line,
//! ascending by count. Words sharing a count are ordered by the configured
//! [`TieBreak`].

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::counter::FrequencyTable;
use crate::error::{Result, WordFreqError};
use crate::models::{ReportOptions, TieBreak, WordCount, WriteMode};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Group the words of `table` by count, ascending.
///
/// Within a group, words keep first-seen order unless `tie_break` asks for
/// lexicographic order.
pub fn group_by_count(table: &FrequencyTable, tie_break: TieBreak) -> BTreeMap<u64, Vec<&str>> {
    let mut groups: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for entry in table.iter() {
        groups.entry(entry.count).or_default().push(&entry.word);
    }

    if tie_break == TieBreak::Lexicographic {
        for words in groups.values_mut() {
            words.sort_unstable();
        }
    }

    groups
}

/// Flatten the grouped table into report lines.
pub fn build_report(table: &FrequencyTable, tie_break: TieBreak) -> Vec<WordCount> {
    group_by_count(table, tie_break)
        .into_iter()
        .flat_map(|(count, words)| {
            words.into_iter().map(move |word| WordCount {
                word: word.to_string(),
                count,
            })
        })
        .collect()
}

/// Render a single report line, without its terminator.
pub fn format_line(line: &WordCount) -> String {
    format!("{}\t{}", line.word, line.count)
}

/// Write report lines to any writer using the platform line terminator.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[WordCount]) -> io::Result<()> {
    for line in lines {
        writer.write_all(format_line(line).as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}

/// Write the report for `table` to the file at `path`.
///
/// The file is created if missing and then truncated or appended to
/// according to `options.write_mode`. When writing fails, a file that this
/// call created is removed again; a path that already existed is left alone.
pub fn write_report(
    path: impl AsRef<Path>,
    table: &FrequencyTable,
    options: &ReportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let lines = build_report(table, options.tie_break);

    let to_error = |source: io::Error| WordFreqError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let existed = fs::symlink_metadata(path).is_ok();
    let file = open_output(path, options.write_mode).map_err(to_error)?;
    let mut writer = BufWriter::new(file);

    if let Err(e) = write_lines(&mut writer, &lines) {
        drop(writer);
        discard_partial(path, existed);
        return Err(to_error(e));
    }

    debug!(
        path = %path.display(),
        lines = lines.len(),
        mode = %options.write_mode,
        tie_break = %options.tie_break,
        "Wrote report"
    );

    Ok(())
}

/// Remove a report left behind by a failed write, but only a regular file
/// that did not exist before the write started.
fn discard_partial(path: &Path, existed: bool) {
    if existed {
        debug!(path = %path.display(), "Keeping pre-existing output after failed write");
        return;
    }
    let is_file = fs::symlink_metadata(path).is_ok_and(|meta| meta.is_file());
    if !is_file {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Failed to remove partial report");
    }
}

fn open_output(path: &Path, mode: WriteMode) -> io::Result<File> {
    let mut open = OpenOptions::new();
    open.create(true);
    match mode {
        WriteMode::Truncate => open.write(true).truncate(true),
        WriteMode::Append => open.append(true),
    };
    open.open(path)
}

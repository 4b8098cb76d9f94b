//! End-to-end conversion from a text file to a frequency report.

use std::path::Path;

use tracing::info;

use crate::counter::count_words;
use crate::error::Result;
use crate::models::{CountSummary, ReportOptions};
use crate::report::write_report;

/// Count the words of `input` and write the report to `output`.
///
/// The output file is only touched once counting has fully succeeded.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ReportOptions,
) -> Result<CountSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let table = count_words(input)?;
    let summary = table.summary();
    info!(
        input = %input.display(),
        tokens = summary.tokens,
        distinct = summary.distinct_words,
        "Counted words"
    );

    write_report(output, &table, options)?;

    Ok(summary)
}

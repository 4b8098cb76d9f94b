use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::{CountSummary, ReportOptions, convert};

use crate::cli::Cli;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_tie_break, validate_paths, write_mode};

pub fn run_convert(cli: &Cli, output_format: OutputFormat) -> CliResult<ExitCode> {
    let (input, output) = validate_paths(&cli.paths)?;
    let options = ReportOptions {
        tie_break: parse_tie_break(&cli.tie_break)?,
        write_mode: write_mode(cli.append),
    };

    debug!(?options, "Converting {} -> {}", input.display(), output.display());

    let summary = convert(input, output, &options)?;

    if cli.summary {
        print_summary(&summary, output_format)?;
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_summary(summary: &CountSummary, output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string(summary)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Tokens:          {}", summary.tokens);
            println!("Distinct words:  {}", summary.distinct_words);
            println!("Empty tokens:    {}", summary.empty_tokens);
        }
    }
    Ok(())
}

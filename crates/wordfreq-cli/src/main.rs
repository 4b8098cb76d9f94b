use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod convert_cmd;
mod error;
mod shared;

use cli::Cli;
use convert_cmd::run_convert;
use error::{output_format_hint, parse_output_format, render_error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI args: {:?}", cli);

    let fallback = output_format_hint(&cli.message_format);
    let output_format = match parse_output_format(&cli.message_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run_convert(&cli, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

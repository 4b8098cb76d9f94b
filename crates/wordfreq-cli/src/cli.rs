use std::path::PathBuf;

use clap::Parser;

/// Word frequency report tool
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
#[command(about = "Count the words of a text file and write a tab-separated frequency report")]
pub struct Cli {
    /// Input text file followed by the output report path
    #[arg(value_name = "PATH", num_args = 0..)]
    pub paths: Vec<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// Order of words sharing a count: lexicographic, first-seen
    #[arg(long, default_value = "lexicographic")]
    pub tie_break: String,

    /// Print a summary of the run to stdout
    #[arg(long)]
    pub summary: bool,

    /// Format of the summary and error messages: json, text
    #[arg(long, default_value = "text")]
    pub message_format: String,

    /// Enable verbose (debug) logging
    #[arg(long)]
    pub verbose: bool,
}

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nlrepair")]
#[command(about = "Replace literal \\n sequences with real line breaks, in place")]
pub struct Cli {
    /// Files to repair, processed in the order given
    pub paths: Vec<PathBuf>,

    /// Read additional paths from a list file (one per line, `#` comments), or `-` for stdin
    #[arg(long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Output format for the run report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any file was not fixed
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines followed by a summary
    Text,
    /// A single JSON document
    Json,
}

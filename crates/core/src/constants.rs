//! Constants used throughout the nlrepair core crate.
//!
//! This module contains the literal patterns, list-file markers and logging
//! defaults so the runner, configuration and binary agree on them.

/// The two-character sequence (backslash, `n`) that stands in for a real line break.
pub const LITERAL_NEWLINE: &str = "\\n";

/// The replacement written for each literal sequence.
pub const NEWLINE: &str = "\n";

/// Lines in a file list starting with this prefix are ignored.
pub const LIST_COMMENT_PREFIX: &str = "#";

/// A file list source of `-` means standard input.
pub const STDIN_LIST_SOURCE: &str = "-";

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "NLREPAIR_LOG";

/// Log filter used when neither `NLREPAIR_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "nlrepair=warn";

/// Header printed before the per-file lines.
pub const REPORT_HEADER: &str = "Fixing corrupted files with literal \\n characters...";

/// Width of the dashed separator lines around the per-file lines.
pub const SEPARATOR_WIDTH: usize = 50;

//! nlrepair File I/O
//!
//! This crate provides the filesystem layer used by the nlrepair runner.
//!
//! ## Design Principles
//!
//! - Files are read whole and decoded as UTF-8; anything that does not decode is
//!   reported rather than guessed at
//! - Rewrites never truncate the target in place: content goes to a temporary file
//!   in the same directory, which is then renamed over the target
//! - A failed rewrite leaves the original file exactly as it was
//! - Permissions of the original file carry over to the rewritten one
//!
//! ## Example Usage
//!
//! ```no_run
//! use nlrepair_files::{read_text, write_atomic};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("notes.txt");
//! let text = read_text(path)?;
//! write_atomic(path, &text.replace("\\n", "\n"))?;
//! # Ok(())
//! # }
//! ```

mod constants;
mod files;

pub use constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
pub use files::{read_text, write_atomic};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Path has no usable parent directory for a temporary file
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// File content is not valid UTF-8 text
    #[error("File is not valid UTF-8 text: {path}: {source}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Temporary file could not be renamed over the target
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

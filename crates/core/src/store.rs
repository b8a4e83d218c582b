//! Storage seam for the runner.
//!
//! The runner talks to the filesystem only through [`TextStore`], so tests can
//! substitute a store that fails at a chosen step.

use nlrepair_files::FilesError;
use std::path::Path;

/// Whole-file text access used by the repair runner.
pub trait TextStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the entire file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, FilesError>;

    /// Replace the file's content. Must not leave a partially written file behind.
    fn write_text(&self, path: &Path, contents: &str) -> Result<(), FilesError>;
}

/// The local filesystem, with atomic write-then-rename rewrites.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFiles;

impl TextStore for LocalFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> Result<String, FilesError> {
        nlrepair_files::read_text(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<(), FilesError> {
        nlrepair_files::write_atomic(path, contents)
    }
}

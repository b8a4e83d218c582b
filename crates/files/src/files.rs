//! Whole-file text reads and atomic rewrites
//!
//! This module provides the two filesystem operations the repair runner needs:
//! [`read_text`] and [`write_atomic`].
//!
//! # Rewrite Model
//!
//! A rewrite never opens the target for truncation. Instead:
//!
//! ```text
//! <dir>/
//! ├── target.js                  # original, untouched until the rename
//! └── .nlrepair-XXXXXX.tmp       # new content, written and synced
//! ```
//!
//! The temporary file is created in the target's own directory so the final
//! rename stays on one filesystem and is atomic. If any step fails the
//! temporary file is dropped (and removed) and the target keeps its original
//! content.
//!
//! # Implementation Notes
//!
//! - Symlinked targets are resolved first so the link itself survives the rewrite
//! - Permissions of an existing target are copied onto the temporary file before
//!   the rename
//! - Content is synced to disk before the rename

use crate::{FilesError, TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads an entire file and decodes it as UTF-8 text
///
/// # Arguments
///
/// * `path` - Path to the file to read
///
/// # Errors
///
/// Returns `FilesError` if:
/// - The file cannot be opened or read (I/O)
/// - The content is not valid UTF-8
pub fn read_text(path: &Path) -> Result<String, FilesError> {
    let bytes = fs::read(path).map_err(|e| {
        FilesError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    String::from_utf8(bytes).map_err(|source| FilesError::InvalidUtf8 {
        path: path.display().to_string(),
        source,
    })
}

/// Replaces the content of a file using write-then-rename
///
/// The new content is written to a temporary file beside the target, synced,
/// given the target's permissions and then renamed over the target. The target
/// is never observable in a partially written state.
///
/// # Arguments
///
/// * `path` - Path of the file to replace (created if it does not exist)
/// * `contents` - The complete new content
///
/// # Errors
///
/// Returns `FilesError` if:
/// - The path has no parent directory (e.g. a filesystem root)
/// - The temporary file cannot be created, written or synced (I/O)
/// - The target's permissions cannot be copied (I/O)
/// - The rename over the target fails
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FilesError> {
    let target = resolve_target(path)?;
    let directory = parent_directory(&target)?;

    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile_in(directory)
        .map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create temporary file in {}: {}",
                    directory.display(),
                    e
                ),
            ))
        })?;

    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write temporary file {}: {}",
                    temp.path().display(),
                    e
                ),
            ))
        })?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| {
                FilesError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to copy permissions of {}: {}", target.display(), e),
                ))
            })?;
    }

    temp.persist(&target).map_err(|e| FilesError::Persist {
        path: target.display().to_string(),
        source: e.error,
    })?;

    tracing::debug!("replaced {} atomically", target.display());
    Ok(())
}

/// Follows a symlinked target to the file it points at.
fn resolve_target(path: &Path) -> Result<PathBuf, FilesError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| {
                FilesError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to resolve symlink {}: {}", path.display(), e),
                ))
            })
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn parent_directory(path: &Path) -> Result<&Path, FilesError> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(Path::new(".")),
        Some(parent) => Ok(parent),
        None => Err(FilesError::InvalidPath(format!(
            "Path has no parent directory: {}",
            path.display()
        ))),
    }
}

//! Run configuration.
//!
//! The list of files to repair is resolved once at process startup and then passed
//! into the runner. Paths come from the command line, from a list file, or from a
//! list read on standard input; the runner itself never looks at arguments or the
//! environment.
//!
//! List format: one path per line. Surrounding whitespace is trimmed, blank lines and
//! lines starting with `#` are skipped.

use crate::constants::{LIST_COMMENT_PREFIX, STDIN_LIST_SOURCE};
use crate::{ConfigError, ConfigResult};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Ordered list of files for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    paths: Vec<PathBuf>,
}

impl RunConfig {
    /// Create a new `RunConfig` from an ordered list of paths.
    ///
    /// Duplicates are kept; every entry is attempted in order.
    pub fn new(paths: Vec<PathBuf>) -> ConfigResult<Self> {
        if paths.is_empty() {
            return Err(ConfigError::EmptyFileList);
        }
        Ok(Self { paths })
    }

    /// Build the configuration from positional paths followed by the entries of an
    /// optional list source (`-` for standard input).
    pub fn from_sources(paths: Vec<PathBuf>, list: Option<&Path>) -> ConfigResult<Self> {
        let mut all = paths;
        if let Some(source) = list {
            all.extend(read_file_list(source)?);
        }
        Self::new(all)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Read a file list from `source`, or from standard input when `source` is `-`.
pub fn read_file_list(source: &Path) -> ConfigResult<Vec<PathBuf>> {
    if source == Path::new(STDIN_LIST_SOURCE) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(ConfigError::StdinRead)?;
        return Ok(parse_file_list(&text));
    }

    let text = std::fs::read_to_string(source).map_err(|source_err| ConfigError::ListRead {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    Ok(parse_file_list(&text))
}

/// Parse list text into paths, skipping blank and comment lines.
pub fn parse_file_list(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(LIST_COMMENT_PREFIX))
        .map(PathBuf::from)
        .collect()
}

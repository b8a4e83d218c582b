use nlrepair_files::FilesError;
use std::path::PathBuf;

/// Failure while repairing a single file.
///
/// These never escape the runner; they are folded into the file's outcome.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error("failed to read file: {0}")]
    Read(#[source] FilesError),
    #[error("failed to write file: {0}")]
    Write(#[source] FilesError),
}

/// Failure while resolving the run configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no files to repair: pass paths as arguments or via --list")]
    EmptyFileList,
    #[error(
        "failed to read file list {path}: {source}",
        path = path.display()
    )]
    ListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read file list from standard input: {0}")]
    StdinRead(std::io::Error),
}

pub type RepairResult<T> = std::result::Result<T, RepairError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

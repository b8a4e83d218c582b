//! The repair runner.
//!
//! Files are processed strictly one at a time, in list order. Every failure is
//! contained at the file level: a missing path is skipped, a read or write error is
//! recorded, and the run always continues to the end.

use crate::config::RunConfig;
use crate::report::{FailureStage, FileOutcome, FileStatus, RunReport};
use crate::repair::unescape_newlines;
use crate::store::{LocalFiles, TextStore};
use crate::{RepairError, RepairResult};
use std::path::Path;

/// Repairs literal `\n` sequences in each configured file.
#[derive(Clone, Debug, Default)]
pub struct RepairRunner<S = LocalFiles> {
    store: S,
}

impl RepairRunner<LocalFiles> {
    /// Creates a runner over the local filesystem.
    pub fn new() -> Self {
        Self { store: LocalFiles }
    }
}

impl<S: TextStore> RepairRunner<S> {
    /// Creates a runner over a custom store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Repairs every configured file and returns the ordered outcomes.
    pub fn run(&self, config: &RunConfig) -> RunReport {
        self.run_with(config, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_file` as each file completes.
    pub fn run_with<F>(&self, config: &RunConfig, mut on_file: F) -> RunReport
    where
        F: FnMut(&FileOutcome),
    {
        let mut report = RunReport::default();

        for path in config.paths() {
            let outcome = FileOutcome {
                path: path.clone(),
                status: self.process(path),
            };
            on_file(&outcome);
            report.push(outcome);
        }

        tracing::info!("{}", report.summary_line());
        report
    }

    fn process(&self, path: &Path) -> FileStatus {
        if !self.store.exists(path) {
            tracing::warn!("file not found: {}", path.display());
            return FileStatus::NotFound;
        }

        match self.repair_file(path) {
            Ok(replacements) => {
                tracing::info!(
                    "fixed {} ({} literal newlines replaced)",
                    path.display(),
                    replacements
                );
                FileStatus::Fixed { replacements }
            }
            Err(e) => {
                tracing::error!("error fixing {}: {}", path.display(), e);
                let stage = match e {
                    RepairError::Read(_) => FailureStage::Read,
                    RepairError::Write(_) => FailureStage::Write,
                };
                FileStatus::Failed {
                    stage,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Read, substitute in memory, write back. Returns the replacement count.
    fn repair_file(&self, path: &Path) -> RepairResult<usize> {
        let content = self.store.read_text(path).map_err(RepairError::Read)?;
        let repaired = unescape_newlines(&content);
        drop(content);
        if repaired.is_unchanged() {
            tracing::debug!("no literal newlines in {}", path.display());
        }

        self.store
            .write_text(path, &repaired.text)
            .map_err(RepairError::Write)?;

        Ok(repaired.replacements)
    }
}

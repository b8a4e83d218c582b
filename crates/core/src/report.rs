//! Structured run results and their text rendering.
//!
//! A run produces a [`RunReport`]: one [`FileOutcome`] per configured path, in list
//! order. Console output is rendered from these values; nothing in the runner prints.

use crate::constants::{REPORT_HEADER, SEPARATOR_WIDTH};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Step at which a file failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Read,
    Write,
}

/// What happened to one configured file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Content was rewritten with real newlines.
    Fixed { replacements: usize },
    /// Nothing exists at the path; it was skipped and not created.
    NotFound,
    /// Reading or writing failed; the file on disk is unchanged.
    Failed { stage: FailureStage, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Paths are reported even when they are not valid UTF-8.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl FileOutcome {
    pub fn is_fixed(&self) -> bool {
        matches!(self.status, FileStatus::Fixed { .. })
    }

    /// Console line for this file.
    pub fn render_line(&self) -> String {
        let path = self.path.display();
        match &self.status {
            FileStatus::Fixed { .. } => format!("✓ Fixed: {}", path),
            FileStatus::NotFound => format!("✗ File not found: {}", path),
            FileStatus::Failed { reason, .. } => format!("✗ Error fixing {}: {}", path, reason),
        }
    }
}

/// Ordered outcomes of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    files: Vec<FileOutcome>,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    files: &'a [FileOutcome],
    fixed: usize,
    total: usize,
}

impl RunReport {
    pub(crate) fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn files(&self) -> &[FileOutcome] {
        &self.files
    }

    /// Number of files repaired successfully.
    pub fn fixed(&self) -> usize {
        self.files.iter().filter(|f| f.is_fixed()).count()
    }

    /// Number of files attempted.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn all_fixed(&self) -> bool {
        self.fixed() == self.total()
    }

    pub fn summary_line(&self) -> String {
        format!("Fixed {}/{} files successfully!", self.fixed(), self.total())
    }

    /// Serialise the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ReportDocument {
            files: &self.files,
            fixed: self.fixed(),
            total: self.total(),
        })
    }
}

pub fn header_line() -> &'static str {
    REPORT_HEADER
}

pub fn separator_line() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_of(outcomes: Vec<FileOutcome>) -> RunReport {
        let mut report = RunReport::default();
        for outcome in outcomes {
            report.push(outcome);
        }
        report
    }

    #[test]
    fn test_render_lines() {
        let fixed = FileOutcome {
            path: PathBuf::from("/app/sw.js"),
            status: FileStatus::Fixed { replacements: 4 },
        };
        let missing = FileOutcome {
            path: PathBuf::from("/app/gone.js"),
            status: FileStatus::NotFound,
        };
        let failed = FileOutcome {
            path: PathBuf::from("/app/blob.js"),
            status: FileStatus::Failed {
                stage: FailureStage::Read,
                reason: "not text".into(),
            },
        };

        assert_eq!(fixed.render_line(), "✓ Fixed: /app/sw.js");
        assert_eq!(missing.render_line(), "✗ File not found: /app/gone.js");
        assert_eq!(failed.render_line(), "✗ Error fixing /app/blob.js: not text");
    }

    #[test]
    fn test_summary_counts_only_fixed() {
        let report = report_of(vec![
            FileOutcome {
                path: PathBuf::from("a.js"),
                status: FileStatus::Fixed { replacements: 0 },
            },
            FileOutcome {
                path: PathBuf::from("b.js"),
                status: FileStatus::NotFound,
            },
        ]);

        assert_eq!(report.fixed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.all_fixed());
        assert_eq!(report.summary_line(), "Fixed 1/2 files successfully!");
    }

    #[test]
    fn test_header_and_separator() {
        assert_eq!(
            header_line(),
            "Fixing corrupted files with literal \\n characters..."
        );
        assert_eq!(separator_line().len(), 50);
        assert!(separator_line().chars().all(|c| c == '-'));
    }

    #[test]
    fn test_json_document_shape() {
        let report = report_of(vec![
            FileOutcome {
                path: PathBuf::from("a.js"),
                status: FileStatus::Fixed { replacements: 2 },
            },
            FileOutcome {
                path: PathBuf::from("b.js"),
                status: FileStatus::NotFound,
            },
            FileOutcome {
                path: PathBuf::from("c.js"),
                status: FileStatus::Failed {
                    stage: FailureStage::Write,
                    reason: "disk full".into(),
                },
            },
        ]);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["fixed"], 1);
        assert_eq!(json["total"], 3);
        assert_eq!(json["files"][0]["path"], "a.js");
        assert_eq!(json["files"][0]["status"], "fixed");
        assert_eq!(json["files"][0]["replacements"], 2);
        assert_eq!(json["files"][1]["status"], "not_found");
        assert_eq!(json["files"][2]["status"], "failed");
        assert_eq!(json["files"][2]["stage"], "write");
        assert_eq!(json["files"][2]["reason"], "disk full");
    }

    #[cfg(unix)]
    #[test]
    fn test_json_with_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let report = report_of(vec![FileOutcome {
            path: PathBuf::from(OsStr::from_bytes(b"caf\xe9.js")),
            status: FileStatus::Fixed { replacements: 1 },
        }]);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["files"][0]["path"], "caf\u{fffd}.js");
        assert_eq!(json["fixed"], 1);
    }
}

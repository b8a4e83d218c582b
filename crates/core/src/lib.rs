//! # nlrepair Core
//!
//! Core logic for repairing text files whose line breaks were saved as the literal
//! two-character sequence `\n`.
//!
//! This crate contains:
//! - The substitution itself ([`unescape_newlines`])
//! - Run configuration resolved at startup ([`RunConfig`])
//! - The sequential [`RepairRunner`] and its structured [`RunReport`]
//!
//! **No CLI concerns**: argument parsing, logging setup and process exit codes belong
//! in the `nlrepair` binary.

pub mod config;
pub mod constants;
pub mod repair;
pub mod report;
pub mod runner;
pub mod store;

mod error;

pub use config::{parse_file_list, read_file_list, RunConfig};
pub use error::{ConfigError, ConfigResult, RepairError, RepairResult};
pub use repair::{count_literal_newlines, unescape_newlines, Repaired};
pub use report::{FailureStage, FileOutcome, FileStatus, RunReport};
pub use runner::RepairRunner;
pub use store::{LocalFiles, TextStore};

//! Typed domain error enum.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! Container-runtime errors have no variant here: start/stop surface the
//! runtime client's own error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::cluster::Verb;

/// Errors raised by the CLI-backed dispatcher operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unsupported platform: no bundled kind binary for {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("kind binary not found at {}. The installation is incomplete.", .path.display())]
    BinaryNotFound { path: PathBuf },

    #[error("kind {verb} failed with exit code {exit_code}{}", stderr_suffix(.stderr))]
    OperationFailed {
        verb: Verb,
        exit_code: i32,
        stderr: String,
    },

    #[error("Failed to execute kind {verb}: {source}")]
    ExecutionFailed {
        verb: Verb,
        #[source]
        source: std::io::Error,
    },

    #[error("{verb} was cancelled")]
    Cancelled { verb: Verb },
}

impl DispatchError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedPlatform { .. } => "UNSUPPORTED_PLATFORM",
            Self::BinaryNotFound { .. } => "BINARY_NOT_FOUND",
            Self::OperationFailed { .. } => "OPERATION_FAILED",
            Self::ExecutionFailed { .. } => "EXECUTION_FAILED",
            Self::Cancelled { .. } => "CANCELLED",
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

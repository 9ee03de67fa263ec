//! Error types for report persistence and process exit plumbing.

use std::{io, path::PathBuf, process::ExitCode};

use thiserror::Error;

/// Failure while writing the verification report to disk.
///
/// This is the only failure surfaced out of report generation; every
/// per-file problem is recorded in the report body instead.
#[derive(Debug, Error)]
#[error("failed to write report {path}: {source}")]
pub struct ReportWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Bundles a fatal runtime message with the process exit code.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: ExitCode,
}

impl RunExit {
    /// Wrap an unexpected internal error.
    pub fn from_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("\n[ERROR] An unexpected error occurred: {err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Exit used when the user cancels the run with Ctrl-C.
    pub fn interrupted() -> Self {
        Self {
            message: "\n[INFO] Verification interrupted by user.".into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Print the message and hand back the exit code for `main`.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

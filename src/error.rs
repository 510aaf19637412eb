//! Error types for the dispatcher.
//!
//! Tool execution failures are not errors at this level: they are recorded
//! as failed entries in the result bundle and the run continues.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal and non-fatal error kinds surfaced by the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// The target path does not exist. Fatal: no tool is invoked.
    #[error("file or directory not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// The report file could not be written. Non-fatal: console output has
    /// already been produced when this is raised.
    #[error("failed to save report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

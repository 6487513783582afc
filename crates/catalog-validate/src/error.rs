//! Error types for report persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors writing the transcript file.
///
/// These never surface as findings: the orchestrator logs them as warnings.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Could not create a fresh report file.
    #[error("falha ao criar relatório {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file was created but writing failed.
    #[error("falha ao gravar relatório {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report persistence.
pub type Result<T> = std::result::Result<T, ReportError>;

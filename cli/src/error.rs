//! Error types for the `foldrun` CLI.
//!
//! Wraps the core errors so `?` works from file loading through to the HTTP
//! call.

use std::path::PathBuf;

use foldrun_core::{FastaError, StatusError, SubmitError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read an input file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Submission failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// Status listing failed.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// FASTA inspection failed.
    #[error(transparent)]
    Fasta(#[from] FastaError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_messages_pass_through() {
        let err: CliError = SubmitError::MissingInput.into();
        assert_eq!(err.to_string(), "FASTA file is missing. Please Upload a FASTA file.");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CliError::Io {
            path: PathBuf::from("missing.fasta"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.fasta"));
    }
}

//! Error types for fold job submission.
//!
//! - [`SubmitError`] - precondition, transport and HTTP failures of `/fold` and `/status`
//! - [`FastaError`] - local FASTA inspection failures
//! - [`StatusError`] - malformed job-status payloads
//!
//! The `Display` text of every variant is exactly what the user sees in the
//! notification banner.

use thiserror::Error;

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised while submitting a job or querying the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No access token was available at submit time.
    #[error("AccessToken is missing")]
    MissingCredential,

    /// No FASTA file was selected at submit time.
    #[error("FASTA file is missing. Please Upload a FASTA file.")]
    MissingInput,

    /// The request never produced an HTTP response.
    #[error("Job submission failed: {0}")]
    Transport(String),

    /// The backend answered 401.
    #[error("Access token was rejected by the backend")]
    Unauthorized(String),

    /// The backend answered with any other non-2xx status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },
}

impl SubmitError {
    /// Build the error matching a non-2xx HTTP status.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if status == 401 {
            SubmitError::Unauthorized(body)
        } else {
            SubmitError::Server { status, body }
        }
    }

    /// True for errors detected before any request was issued.
    pub fn is_precondition(&self) -> bool {
        matches!(self, SubmitError::MissingCredential | SubmitError::MissingInput)
    }
}

// =============================================================================
// FASTA Errors
// =============================================================================

/// Errors found while inspecting a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FastaError {
    /// The file holds no `>` record at all.
    #[error("No sequences found in the FASTA file. Please provide a valid FASTA file.")]
    NoSequences,

    /// At least one record has no residues.
    #[error("One or more sequences with 0 residues. Please check your FASTA file for inconsistencies.")]
    EmptySequence { index: usize },

    /// The file is not valid UTF-8 text.
    #[error("FASTA file is not valid text: {0}")]
    NotText(String),
}

// =============================================================================
// Status Errors
// =============================================================================

/// Errors while listing pipeline runs.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The request itself failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The body was not the expected JSON array.
    #[error("Invalid status response: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Result type for FASTA inspection.
pub type FastaResult<T> = Result<T, FastaError>;

/// Result type for status listing.
pub type StatusResult<T> = Result<T, StatusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages_are_exact() {
        assert_eq!(SubmitError::MissingCredential.to_string(), "AccessToken is missing");
        assert_eq!(
            SubmitError::MissingInput.to_string(),
            "FASTA file is missing. Please Upload a FASTA file."
        );
        assert!(SubmitError::MissingInput.is_precondition());
        assert!(!SubmitError::Transport("refused".into()).is_precondition());
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(
            SubmitError::from_status(401, "{'status':'Unauthorized'}"),
            SubmitError::Unauthorized(_)
        ));

        let err = SubmitError::from_status(400, "uploaded file missing.");
        assert_eq!(err.to_string(), "Server error (400): uploaded file missing.");
    }

    #[test]
    fn test_status_error_wraps_submit() {
        let err: StatusError = SubmitError::MissingCredential.into();
        assert_eq!(err.to_string(), "AccessToken is missing");
    }
}

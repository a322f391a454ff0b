//! # Foldrun core - fold job form and submission
//!
//! Shared by the Leptos frontend and the `foldrun` CLI. Holds the form state,
//! validates and builds the `/fold` multipart request, and maps the outcome to
//! a transient notification.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   JobForm   │────▶│ JobSubmitter │────▶│  Transport  │────▶│ Notification │
//! │ (form state)│     │ (token, file)│     │ (POST /fold)│     │   (banner)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types shown to the user
//! - [`models`] - Job submission payload types
//! - [`credentials`] - Access-token provider seam
//! - [`form`] - Form state holder
//! - [`submit`] - Submission handler and transport seam
//! - [`notification`] - Notification banner state machine
//! - [`fasta`] - Advisory FASTA inspection
//! - [`status`] - Pipeline-run listing

pub mod error;
pub mod models;

pub mod credentials;
pub mod form;
pub mod submit;

pub mod notification;

pub mod fasta;
pub mod status;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FastaError, FastaResult, StatusError, StatusResult, SubmitError, SubmitResult};

pub use models::{endpoint_url, fields, FastaFile, FoldRequest, JobSubmission, ProteinType, Toggle};

pub use credentials::{AccessToken, CredentialProvider, StaticCredentials};

pub use form::{JobForm, NO_FILE_LABEL};

pub use submit::{BackendTransport, HttpReply, JobSubmitter, FOLD_PATH, STATUS_PATH};

pub use notification::{Generation, Notification, NotificationBanner, Severity, AUTO_HIDE_MS};

pub use fasta::{inspect, inspect_bytes, FastaSummary, SequenceInfo};

pub use status::{parse_runs, PipelineRun};

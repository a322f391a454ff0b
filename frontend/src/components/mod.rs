//! UI Components for the folding portal.
//!
//! # Layout Components
//! - [`Header`] - Title bar with sign-in status and "New job"
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`NewJob`] - FASTA upload and job parameters
//! - [`Snackbar`] - Transient success/error banner
//! - [`JobsPanel`] - Pipeline runs reported by the backend

mod footer;
mod header;
mod hero;
mod jobs;
mod new_job;
mod snackbar;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use jobs::*;
pub use new_job::*;
pub use snackbar::*;

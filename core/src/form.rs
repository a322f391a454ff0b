//! In-memory state of the "New Job" form.
//!
//! One setter per field, no cross-field validation. Selecting a file also
//! records its display name and an advisory FASTA summary.

use crate::error::FastaResult;
use crate::fasta::{self, FastaSummary};
use crate::models::{FastaFile, JobSubmission, ProteinType, Toggle};

/// Label shown while no file is selected.
pub const NO_FILE_LABEL: &str = "No file chosen.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    submission: JobSubmission,
    file_name: Option<String>,
    fasta: Option<FastaResult<FastaSummary>>,
}

impl JobForm {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    pub fn set_experiment_id(&mut self, value: impl Into<String>) {
        self.submission.experiment_id = value.into();
    }

    pub fn set_protein_type(&mut self, value: Option<ProteinType>) {
        self.submission.protein_type = value;
    }

    pub fn set_small_bfd(&mut self, value: Option<Toggle>) {
        self.submission.small_bfd = value;
    }

    pub fn set_relaxation(&mut self, value: Option<Toggle>) {
        self.submission.relaxation = value;
    }

    pub fn set_prediction_count(&mut self, value: impl Into<String>) {
        self.submission.prediction_count = value.into();
    }

    /// Select a file, replacing any previous one.
    pub fn set_file(&mut self, file: FastaFile) {
        log::debug!("Selected FASTA file {} ({} bytes)", file.name, file.len());
        self.fasta = Some(fasta::inspect_bytes(&file.content));
        self.file_name = Some(file.name.clone());
        self.submission.file = Some(file);
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    pub fn experiment_id(&self) -> &str {
        &self.submission.experiment_id
    }

    pub fn protein_type(&self) -> Option<ProteinType> {
        self.submission.protein_type
    }

    pub fn small_bfd(&self) -> Option<Toggle> {
        self.submission.small_bfd
    }

    pub fn relaxation(&self) -> Option<Toggle> {
        self.submission.relaxation
    }

    pub fn prediction_count(&self) -> &str {
        &self.submission.prediction_count
    }

    pub fn file(&self) -> Option<&FastaFile> {
        self.submission.file.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn has_file(&self) -> bool {
        self.submission.file.is_some()
    }

    /// File name, or [`NO_FILE_LABEL`].
    pub fn file_label(&self) -> &str {
        self.file_name.as_deref().unwrap_or(NO_FILE_LABEL)
    }

    /// Inspection of the selected file, if any.
    pub fn fasta_summary(&self) -> Option<&FastaResult<FastaSummary>> {
        self.fasta.as_ref()
    }

    /// Copy of the current values for submission.
    pub fn snapshot(&self) -> JobSubmission {
        self.submission.clone()
    }

    pub fn submission(&self) -> &JobSubmission {
        &self.submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let form = JobForm::new();
        assert_eq!(form.experiment_id(), "");
        assert_eq!(form.prediction_count(), "");
        assert!(form.protein_type().is_none());
        assert!(!form.has_file());
        assert_eq!(form.file_label(), "No file chosen.");
        assert!(form.fasta_summary().is_none());
    }

    #[test]
    fn test_selecting_file_updates_label() {
        let mut form = JobForm::new();
        form.set_file(FastaFile::new("protein.fasta", ">A\nMKTAYIAK\n"));

        assert!(form.has_file());
        assert_eq!(form.file_name(), Some("protein.fasta"));
        assert_eq!(form.file_label(), "protein.fasta");
        assert!(form.fasta_summary().unwrap().as_ref().unwrap().is_monomer());
    }

    #[test]
    fn test_invalid_fasta_still_selected() {
        let mut form = JobForm::new();
        form.set_file(FastaFile::new("empty.fasta", ""));
        assert!(form.has_file());
        assert!(form.fasta_summary().unwrap().is_err());
    }

    #[test]
    fn test_setters_feed_snapshot() {
        let mut form = JobForm::new();
        form.set_experiment_id("amylase-fold-12");
        form.set_protein_type(Some(ProteinType::Multimer));
        form.set_small_bfd(Some(Toggle::No));
        form.set_relaxation(Some(Toggle::Yes));
        form.set_prediction_count("5");

        let snapshot = form.snapshot();
        assert_eq!(snapshot.experiment_id, "amylase-fold-12");
        assert_eq!(snapshot.protein_type, Some(ProteinType::Multimer));
        assert_eq!(snapshot.small_bfd, Some(Toggle::No));
        assert_eq!(snapshot.relaxation, Some(Toggle::Yes));
        assert_eq!(snapshot.prediction_count, "5");
        assert!(snapshot.file.is_none());
    }

    #[test]
    fn test_prediction_count_is_free_text() {
        let mut form = JobForm::new();
        form.set_prediction_count("three");
        assert_eq!(form.snapshot().prediction_count, "three");
    }

    #[test]
    fn test_each_keystroke_replaces_value() {
        let mut form = JobForm::new();
        for typed in ["a", "am", "amy"] {
            form.set_experiment_id(typed);
            assert_eq!(form.snapshot().experiment_id, typed);
        }

        form.set_experiment_id("");
        assert_eq!(form.snapshot().experiment_id, "");
    }
}

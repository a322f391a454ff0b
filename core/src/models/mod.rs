//! Domain models for fold job submission.
//!
//! - [`ProteinType`] - monomer or multimer pipeline
//! - [`Toggle`] - yes/no switches (small BFD, relaxation)
//! - [`FastaFile`] - the uploaded sequence file
//! - [`JobSubmission`] - everything the form holds at submit time
//! - [`FoldRequest`] - the validated, ready-to-send `/fold` payload

use std::fmt;
use std::str::FromStr;

use crate::credentials::AccessToken;

// =============================================================================
// Wire field names
// =============================================================================

/// Multipart part names, as the `/fold` endpoint reads them.
pub mod fields {
    pub const EXPERIMENT_ID: &str = "experimentId";
    pub const SMALL_BFD: &str = "smallBFD";
    pub const RELAXATION: &str = "relaxation";
    pub const PROTEIN_TYPE: &str = "proteinType";
    pub const PREDICTION_COUNT: &str = "predictionCount";
    pub const FILE: &str = "file";
}

// =============================================================================
// Protein Type
// =============================================================================

/// Which AlphaFold model preset the backend should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProteinType {
    /// Single polypeptide chain.
    Monomer,
    /// Several chains folded together.
    Multimer,
}

impl ProteinType {
    pub const ALL: [ProteinType; 2] = [ProteinType::Monomer, ProteinType::Multimer];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProteinType::Monomer => "monomer",
            ProteinType::Multimer => "multimer",
        }
    }

    /// Label shown in select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            ProteinType::Monomer => "Monomer",
            ProteinType::Multimer => "Multimer",
        }
    }
}

impl fmt::Display for ProteinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProteinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monomer" => Ok(ProteinType::Monomer),
            "multimer" => Ok(ProteinType::Multimer),
            other => Err(format!("unknown protein type '{}' (expected monomer or multimer)", other)),
        }
    }
}

// =============================================================================
// Yes/No Toggle
// =============================================================================

/// A yes/no form option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    pub const ALL: [Toggle; 2] = [Toggle::Yes, Toggle::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Yes => "yes",
            Toggle::No => "no",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Yes => "Yes",
            Toggle::No => "No",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Toggle::Yes),
            "no" => Ok(Toggle::No),
            other => Err(format!("unknown option '{}' (expected yes or no)", other)),
        }
    }
}

/// Wire value of an optional enum field; unset is the empty string.
pub fn wire_value<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Parse a select-box value, treating the empty string as unset.
pub fn parse_optional<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

// =============================================================================
// FASTA File
// =============================================================================

/// An uploaded FASTA file: display name plus raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct FastaFile {
    /// File name as chosen by the user (e.g. `protein.fasta`).
    pub name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl FastaFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Debug for FastaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastaFile")
            .field("name", &self.name)
            .field("bytes", &self.content.len())
            .finish()
    }
}

// =============================================================================
// Job Submission
// =============================================================================

/// Snapshot of the form at submit time.
///
/// Only the file is mandatory; every other field may be empty and is sent
/// as-is. `prediction_count` is deliberately kept as free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSubmission {
    pub experiment_id: String,
    pub file: Option<FastaFile>,
    pub small_bfd: Option<Toggle>,
    pub protein_type: Option<ProteinType>,
    pub relaxation: Option<Toggle>,
    pub prediction_count: String,
}

impl JobSubmission {
    /// The five text parts in the order the form appends them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::EXPERIMENT_ID, self.experiment_id.clone()),
            (fields::SMALL_BFD, wire_value(self.small_bfd)),
            (fields::RELAXATION, wire_value(self.relaxation)),
            (fields::PROTEIN_TYPE, wire_value(self.protein_type)),
            (fields::PREDICTION_COUNT, self.prediction_count.clone()),
        ]
    }
}

// =============================================================================
// Fold Request
// =============================================================================

/// A validated `/fold` request, ready for a transport to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRequest {
    /// Absolute or host-relative `/fold` URL.
    pub url: String,
    /// Token for the `Authorization: Bearer` header.
    pub access_token: AccessToken,
    /// Text parts, in wire order.
    pub fields: Vec<(&'static str, String)>,
    /// The `file` part.
    pub file: FastaFile,
}

impl FoldRequest {
    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        self.access_token.bearer()
    }

    /// Look up a text part by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Join the backend host and an endpoint path.
///
/// A single trailing `/` on the host is dropped; an empty host yields a
/// host-relative path.
pub fn endpoint_url(backend_host: &str, path: &str) -> String {
    let host = backend_host.strip_suffix('/').unwrap_or(backend_host);
    format!("{}{}", host, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(wire_value(Some(ProteinType::Multimer)), "multimer");
        assert_eq!(wire_value(Some(Toggle::No)), "no");
        assert_eq!(wire_value::<Toggle>(None), "");
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<Toggle>("").unwrap(), None);
        assert_eq!(parse_optional::<Toggle>("Yes").unwrap(), Some(Toggle::Yes));
        assert_eq!(
            parse_optional::<ProteinType>("monomer").unwrap(),
            Some(ProteinType::Monomer)
        );
        assert!(parse_optional::<ProteinType>("dimer").is_err());
    }

    #[test]
    fn test_text_fields_order() {
        let submission = JobSubmission {
            experiment_id: "amylase-fold-12".into(),
            small_bfd: Some(Toggle::Yes),
            protein_type: Some(ProteinType::Monomer),
            prediction_count: "3".into(),
            ..Default::default()
        };

        let names: Vec<_> = submission.text_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec!["experimentId", "smallBFD", "relaxation", "proteinType", "predictionCount"]
        );
        assert_eq!(submission.text_fields()[2].1, "");
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:8080", "/fold"), "http://localhost:8080/fold");
        assert_eq!(endpoint_url("http://localhost:8080/", "/fold"), "http://localhost:8080/fold");
        assert_eq!(endpoint_url("", "/fold"), "/fold");
    }

    #[test]
    fn test_fasta_file_debug_hides_content() {
        let file = FastaFile::new("protein.fasta", ">a\nMKV\n");
        let debug = format!("{:?}", file);
        assert!(debug.contains("protein.fasta"));
        assert!(!debug.contains("MKV"));
    }
}

//! FASTA inspection.
//!
//! Mirrors the checks the folding backend runs on an uploaded file: at least
//! one record, no empty record, and monomer vs. multimer from the record
//! count. Purely advisory on the client side.

use crate::error::{FastaError, FastaResult};
use crate::models::ProteinType;

/// One `>` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInfo {
    /// First word of the header line.
    pub id: String,
    /// Rest of the header line.
    pub description: String,
    /// Residue count, whitespace excluded.
    pub length: usize,
}

/// Result of a successful inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSummary {
    pub sequences: Vec<SequenceInfo>,
}

impl FastaSummary {
    pub fn is_monomer(&self) -> bool {
        self.sequences.len() == 1
    }

    pub fn suggested_protein_type(&self) -> ProteinType {
        if self.is_monomer() {
            ProteinType::Monomer
        } else {
            ProteinType::Multimer
        }
    }

    pub fn total_residues(&self) -> usize {
        self.sequences.iter().map(|s| s.length).sum()
    }

    /// One-line description for the form ("2 sequences, 431 residues (multimer)").
    pub fn describe(&self) -> String {
        let count = self.sequences.len();
        format!(
            "{} sequence{}, {} residues ({})",
            count,
            if count == 1 { "" } else { "s" },
            self.total_residues(),
            self.suggested_protein_type()
        )
    }
}

/// Inspect FASTA text.
pub fn inspect(text: &str) -> FastaResult<FastaSummary> {
    let mut sequences: Vec<SequenceInfo> = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            let header = header.trim();
            let (id, description) = match header.split_once(char::is_whitespace) {
                Some((id, rest)) => (id.to_string(), rest.trim().to_string()),
                None => (header.to_string(), String::new()),
            };
            sequences.push(SequenceInfo { id, description, length: 0 });
            continue;
        }

        if line.starts_with(';') {
            continue;
        }

        // Text before the first header is ignored.
        if let Some(current) = sequences.last_mut() {
            current.length += line.chars().filter(|c| !c.is_whitespace()).count();
        }
    }

    if sequences.is_empty() {
        return Err(FastaError::NoSequences);
    }

    if let Some(index) = sequences.iter().position(|s| s.length == 0) {
        return Err(FastaError::EmptySequence { index });
    }

    Ok(FastaSummary { sequences })
}

/// Inspect raw file bytes.
pub fn inspect_bytes(bytes: &[u8]) -> FastaResult<FastaSummary> {
    let text = std::str::from_utf8(bytes).map_err(|e| FastaError::NotText(e.to_string()))?;
    inspect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_is_monomer() {
        let summary = inspect(">sp|P04746|AMY_HUMAN Pancreatic alpha-amylase\nQYSPNTQQ\nGRTSIVHL\n").unwrap();
        assert_eq!(summary.sequences.len(), 1);
        assert_eq!(summary.sequences[0].id, "sp|P04746|AMY_HUMAN");
        assert_eq!(summary.sequences[0].description, "Pancreatic alpha-amylase");
        assert_eq!(summary.sequences[0].length, 16);
        assert!(summary.is_monomer());
        assert_eq!(summary.suggested_protein_type(), ProteinType::Monomer);
    }

    #[test]
    fn test_two_records_is_multimer() {
        let summary = inspect(">A\nMKT AYI\n\n>B\r\nGSH\r\n").unwrap();
        assert_eq!(summary.sequences.len(), 2);
        assert_eq!(summary.sequences[0].length, 6);
        assert_eq!(summary.sequences[1].length, 3);
        assert_eq!(summary.suggested_protein_type(), ProteinType::Multimer);
        assert_eq!(summary.describe(), "2 sequences, 9 residues (multimer)");
    }

    #[test]
    fn test_no_records() {
        assert_eq!(inspect("MKTAYI\n"), Err(FastaError::NoSequences));
        assert_eq!(
            inspect("").unwrap_err().to_string(),
            "No sequences found in the FASTA file. Please provide a valid FASTA file."
        );
    }

    #[test]
    fn test_empty_record() {
        let err = inspect(">A\nMKT\n>B\n").unwrap_err();
        assert_eq!(err, FastaError::EmptySequence { index: 1 });
        assert!(err.to_string().starts_with("One or more sequences with 0 residues."));
    }

    #[test]
    fn test_comment_lines_ignored() {
        let summary = inspect(";generated\n>A\n;note\nMK\n").unwrap();
        assert_eq!(summary.sequences[0].length, 2);
    }

    #[test]
    fn test_non_utf8() {
        assert!(matches!(inspect_bytes(&[0xff, 0xfe]), Err(FastaError::NotText(_))));
    }
}

//! Reading FASTA files from disk.

use std::path::Path;

use foldrun_core::FastaFile;

use crate::error::{CliError, CliResult};

/// Read a FASTA file, keeping its file name for the `file` part.
pub async fn load_fasta(path: &Path) -> CliResult<FastaFile> {
    let content = tokio::fs::read(path).await.map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "sequence.fasta".to_string());

    Ok(FastaFile::new(name, content))
}

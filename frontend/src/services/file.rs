//! Reading a user-selected file into memory.

use foldrun_core::FastaFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Read the whole file. The form only treats the file as selected once this
/// resolves.
pub async fn read_fasta_file(file: File) -> Result<FastaFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;

    let content = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FastaFile::new(file.name(), content))
}

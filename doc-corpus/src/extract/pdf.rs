//! PDF → plain text via `pdf-extract`.
//!
//! Blocking; the loader calls it on the blocking pool.

use std::path::Path;

use crate::errors::CorpusError;

/// Extracts all embedded text from the PDF at `path`.
///
/// # Errors
/// [`CorpusError::Io`] if the file cannot be read, [`CorpusError::Pdf`] if the
/// parser rejects it.
pub fn extract_file(path: &Path) -> Result<String, CorpusError> {
    let bytes = std::fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    extract_bytes(path, &bytes)
}

fn extract_bytes(path: &Path, bytes: &[u8]) -> Result<String, CorpusError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| CorpusError::Pdf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

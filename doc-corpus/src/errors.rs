//! Unified error type for the doc-corpus crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    // ── Configuration ───────────────────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: &'static str, value: String },

    // ── I/O & filesystem ────────────────────────────────────────────────────
    /// Reading a directory or a file failed.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Extraction ──────────────────────────────────────────────────────────
    /// The PDF parser rejected the file (or panicked on it).
    #[error("pdf extraction failed for {path}: {reason}")]
    Pdf { path: PathBuf, reason: String },

    /// The file is not a readable Word document container.
    #[error("docx extraction failed for {path}: {reason}")]
    Docx { path: PathBuf, reason: String },

    /// Blocking extraction task was cancelled.
    #[error("extraction task for {path} did not complete: {reason}")]
    Task { path: PathBuf, reason: String },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

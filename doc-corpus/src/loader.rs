//! Directory scan + per-file extraction into a [`Corpus`].
//!
//! Directories are visited in configured order, files inside each directory in
//! file-name order. Missing directories are skipped. What happens to a file
//! that cannot be parsed depends on [`LoadPolicy`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    config::{CorpusConfig, LoadPolicy},
    corpus::Corpus,
    errors::CorpusError,
    extract::{DocFormat, docx, html, pdf},
};

/// Result of loading one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    Loaded {
        path: PathBuf,
        format: DocFormat,
        chars: usize,
    },
    /// Parsed fine but contained no text; contributes no block.
    Empty { path: PathBuf, format: DocFormat },
    Failed {
        path: PathBuf,
        format: DocFormat,
        error: CorpusError,
    },
}

/// Corpus plus a per-file account of how it was built.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub corpus: Corpus,
    pub files: Vec<FileOutcome>,
    /// Configured directories that did not exist (or were not directories).
    pub skipped_dirs: Vec<PathBuf>,
}

impl LoadReport {
    pub fn loaded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f, FileOutcome::Loaded { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f, FileOutcome::Failed { .. }))
            .count()
    }
}

/// Loads every supported file from the configured directories.
///
/// # Errors
/// With [`LoadPolicy::FailFast`], the first unreadable directory or file.
/// With [`LoadPolicy::Isolate`], only a directory listing failure of an
/// existing directory is fatal; file failures land in [`LoadReport::files`].
#[instrument(skip_all, fields(dirs = cfg.source_dirs.len(), policy = ?cfg.policy))]
pub async fn load(cfg: &CorpusConfig) -> Result<LoadReport, CorpusError> {
    let mut blocks = Vec::new();
    let mut files = Vec::new();
    let mut skipped_dirs = Vec::new();

    for dir in &cfg.source_dirs {
        if !tokio::fs::metadata(dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            info!(dir = %dir.display(), "source directory not found, skipping");
            skipped_dirs.push(dir.clone());
            continue;
        }

        for (path, format) in list_sources(dir).await? {
            match extract(&path, format).await {
                Ok(text) if text.trim().is_empty() => {
                    debug!(path = %path.display(), %format, "document has no text");
                    files.push(FileOutcome::Empty { path, format });
                }
                Ok(text) => {
                    let chars = text.chars().count();
                    info!(path = %path.display(), %format, chars, "document loaded");
                    blocks.push(text);
                    files.push(FileOutcome::Loaded {
                        path,
                        format,
                        chars,
                    });
                }
                Err(error) => {
                    if cfg.policy == LoadPolicy::FailFast {
                        return Err(error);
                    }
                    warn!(path = %path.display(), %format, %error, "document skipped");
                    files.push(FileOutcome::Failed {
                        path,
                        format,
                        error,
                    });
                }
            }
        }
    }

    let report = LoadReport {
        corpus: Corpus::new(blocks),
        files,
        skipped_dirs,
    };

    info!(
        documents = report.corpus.len(),
        failed = report.failed_count(),
        skipped_dirs = report.skipped_dirs.len(),
        total_chars = report.corpus.total_chars(),
        "corpus loaded"
    );

    Ok(report)
}

/// Supported files directly inside `dir`, sorted by file name.
async fn list_sources(dir: &Path) -> Result<Vec<(PathBuf, DocFormat)>, CorpusError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| CorpusError::io(dir, e))?;

    let mut out = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| CorpusError::io(dir, e))?
    {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        match DocFormat::from_path(&path) {
            Some(format) => out.push((path, format)),
            None => debug!(path = %path.display(), "unsupported file type, ignoring"),
        }
    }

    out.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(out)
}

async fn extract(path: &Path, format: DocFormat) -> Result<String, CorpusError> {
    match format {
        DocFormat::Html => {
            let raw = tokio::fs::read(path)
                .await
                .map_err(|e| CorpusError::io(path, e))?;
            Ok(html::extract_text(&String::from_utf8_lossy(&raw)))
        }
        DocFormat::Pdf => run_blocking(path, format, pdf::extract_file).await,
        DocFormat::Docx => run_blocking(path, format, docx::extract_file).await,
    }
}

/// Runs a blocking extractor on the blocking pool; a panic inside the parser
/// becomes an error for this file only.
async fn run_blocking(
    path: &Path,
    format: DocFormat,
    extractor: fn(&Path) -> Result<String, CorpusError>,
) -> Result<String, CorpusError> {
    let owned = path.to_path_buf();
    match tokio::task::spawn_blocking(move || extractor(&owned)).await {
        Ok(res) => res,
        Err(join) if join.is_panic() => {
            let path = path.to_path_buf();
            let reason = "parser panicked".to_string();
            Err(match format {
                DocFormat::Docx => CorpusError::Docx { path, reason },
                _ => CorpusError::Pdf { path, reason },
            })
        }
        Err(join) => Err(CorpusError::Task {
            path: path.to_path_buf(),
            reason: join.to_string(),
        }),
    }
}

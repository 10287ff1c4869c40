//! Reference-document corpus.
//!
//! Scans the configured directories once at startup, extracts plain text
//! from every PDF, Word (`.docx`) and HTML file it finds and keeps the
//! results as an immutable, cheaply clonable [`Corpus`].
//!
//! ```ignore
//! let cfg = doc_corpus::CorpusConfig::from_env()?;
//! let report = doc_corpus::load(&cfg).await?;
//! println!("{} documents", report.corpus.len());
//! ```

pub mod config;
pub mod corpus;
pub mod errors;
pub mod extract;
pub mod loader;

#[cfg(test)]
mod test_support;

pub use config::{CorpusConfig, LoadPolicy};
pub use corpus::Corpus;
pub use errors::CorpusError;
pub use extract::DocFormat;
pub use loader::{FileOutcome, LoadReport, load};

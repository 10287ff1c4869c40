use std::{path::PathBuf, sync::Arc};

use contextor::Contextor;
use doc_corpus::Corpus;
use thiserror::Error;

/// Shared state for all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Reference corpus, loaded once before the listener binds.
    pub corpus: Arc<Corpus>,
    /// Completion gateway used by `/ask`.
    pub contextor: Arc<Contextor>,
}

impl AppState {
    pub fn new(corpus: Corpus, contextor: Contextor) -> Self {
        Self {
            corpus: Arc::new(corpus),
            contextor: Arc::new(contextor),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Listener and static-site settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Root of the static frontend; `/` serves its `index.html`.
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Load from `HOST` (default `0.0.0.0`), `PORT` (default `3000`) and
    /// `SITE_DIR` (default `site`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|k: &str| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            None => 3000,
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidPort {
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            site_dir: PathBuf::from(get("SITE_DIR").unwrap_or_else(|| "site".into())),
        })
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

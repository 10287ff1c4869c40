//! Loader configuration loaded from environment variables.

use std::path::PathBuf;

use crate::errors::CorpusError;

/// What to do when a single source file cannot be read or parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Record the failure, skip the file, keep loading the rest.
    Isolate,
    /// Abort the whole load on the first failure.
    FailFast,
}

/// Directories to scan, in order, and the failure policy.
///
/// Each directory is scanned non-recursively; a subdirectory is only read
/// when it is listed here itself.
#[derive(Clone, Debug)]
pub struct CorpusConfig {
    pub source_dirs: Vec<PathBuf>,
    pub policy: LoadPolicy,
}

impl CorpusConfig {
    pub fn new(source_dirs: Vec<PathBuf>, policy: LoadPolicy) -> Self {
        Self {
            source_dirs,
            policy,
        }
    }

    /// Build from environment variables with defaults.
    ///
    /// - `DOCS_DIR` (default `docs`)
    /// - `SITE_DIR` (default `site`), scanned when `CORPUS_INCLUDE_SITE` is `true` (default)
    /// - `CORPUS_EXTRA_DIRS`: comma-separated extra directories
    /// - `CORPUS_FAIL_FAST`: `true` aborts on the first bad file (default `false`)
    pub fn from_env() -> Result<Self, CorpusError> {
        Self::from_lookup(&|k: &str| std::env::var(k).ok())
    }

    /// Same as [`CorpusConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, CorpusError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut source_dirs = vec![PathBuf::from(env(lookup, "DOCS_DIR", "docs"))];

        if parse_bool(lookup, "CORPUS_INCLUDE_SITE", true)? {
            source_dirs.push(PathBuf::from(env(lookup, "SITE_DIR", "site")));
        }

        if let Some(extra) = lookup("CORPUS_EXTRA_DIRS") {
            source_dirs.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from),
            );
        }

        let policy = if parse_bool(lookup, "CORPUS_FAIL_FAST", false)? {
            LoadPolicy::FailFast
        } else {
            LoadPolicy::Isolate
        };

        Ok(Self {
            source_dirs,
            policy,
        })
    }
}

fn env<F>(lookup: &F, key: &str, dflt: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| dflt.to_string())
}

fn parse_bool<F>(lookup: &F, key: &'static str, dflt: bool) -> Result<bool, CorpusError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(dflt),
        Some(v) if v.is_empty() => Ok(dflt),
        Some(v) => match v.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(CorpusError::EnvParse { key, value: v }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_scan_docs_then_site() {
        let cfg = CorpusConfig::from_lookup(&lookup(&[])).unwrap();
        assert_eq!(
            cfg.source_dirs,
            vec![PathBuf::from("docs"), PathBuf::from("site")]
        );
        assert_eq!(cfg.policy, LoadPolicy::Isolate);
    }

    #[test]
    fn extra_dirs_and_fail_fast() {
        let cfg = CorpusConfig::from_lookup(&lookup(&[
            ("DOCS_DIR", "/srv/docs"),
            ("CORPUS_INCLUDE_SITE", "false"),
            ("CORPUS_EXTRA_DIRS", "site/pages, ,site/stages"),
            ("CORPUS_FAIL_FAST", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.source_dirs,
            vec![
                PathBuf::from("/srv/docs"),
                PathBuf::from("site/pages"),
                PathBuf::from("site/stages"),
            ]
        );
        assert_eq!(cfg.policy, LoadPolicy::FailFast);
    }

    #[test]
    fn garbage_bool_is_rejected() {
        let err = CorpusConfig::from_lookup(&lookup(&[("CORPUS_FAIL_FAST", "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::EnvParse {
                key: "CORPUS_FAIL_FAST",
                ..
            }
        ));
    }
}

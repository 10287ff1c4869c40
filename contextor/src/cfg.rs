//! Runtime configuration loaded from environment variables.

use crate::error::ContextorError;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Default system instructions for the MensHealthNZ assistant.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant for MensHealthNZ. \
Answer in plain, supportive language using the provided context where it is relevant. \
You do not diagnose; encourage the user to talk to their GP or a health professional about symptoms, test results or treatment.";

/// Config bag for the gateway. All fields have defaults via `from_env`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextorConfig {
    /// Chunk width in characters, always >= 1.
    pub chunk_size: usize,
    pub system_prompt: String,
}

impl Default for ContextorConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            system_prompt: DEFAULT_SYSTEM.to_string(),
        }
    }
}

impl ContextorConfig {
    /// Build from environment variables with sensible defaults.
    ///
    /// - `CONTEXT_CHUNK_SIZE` (default `2000`, must be >= 1)
    /// - `SYSTEM_PROMPT` (default [`DEFAULT_SYSTEM`])
    pub fn from_env() -> Result<Self, ContextorError> {
        Self::from_lookup(&|k: &str| std::env::var(k).ok())
    }

    /// Same as [`ContextorConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ContextorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chunk_size = match non_empty(lookup, "CONTEXT_CHUNK_SIZE") {
            None => DEFAULT_CHUNK_SIZE,
            Some(raw) => {
                let n: usize = raw.parse().map_err(|e: std::num::ParseIntError| {
                    ContextorError::Config {
                        key: "CONTEXT_CHUNK_SIZE",
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if n == 0 {
                    return Err(ContextorError::Config {
                        key: "CONTEXT_CHUNK_SIZE",
                        value: raw,
                        reason: "must be at least 1".into(),
                    });
                }
                n
            }
        };

        let system_prompt =
            non_empty(lookup, "SYSTEM_PROMPT").unwrap_or_else(|| DEFAULT_SYSTEM.to_string());

        Ok(Self {
            chunk_size,
            system_prompt,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

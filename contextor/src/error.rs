//! Typed error for the contextor crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextorError {
    /// A contextor env variable has an unusable value.
    #[error("invalid value for {key} = '{value}': {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Building the provider client or calling it failed.
    #[error("completion provider error: {0}")]
    Upstream(#[from] AiLlmError),
}

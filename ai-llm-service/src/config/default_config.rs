//! Default provider config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer credential (mandatory)
//! - `OPENAI_URL`       = provider base URL (default `https://api.openai.com`)
//! - `OPENAI_MODEL`     = chat model (default `gpt-3.5-turbo`)
//! - `LLM_MAX_TOKENS`   = max generated tokens (default `500`)
//! - `LLM_TEMPERATURE`  = optional sampling temperature, `0.0..=2.0`
//! - `LLM_TIMEOUT_SECS` = optional request timeout; unset keeps the transport default

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, env_opt_f32, env_opt_u32, env_opt_u64, must_env, process_env,
        validate_http_endpoint, validate_range_f32,
    },
};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Constructs the chat-completion config from the process environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent or blank
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numeric knobs
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    config_openai_chat_from(&process_env)
}

/// Same as [`config_openai_chat`], reading variables through `lookup`.
pub fn config_openai_chat_from<F>(lookup: &F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = must_env(lookup, "OPENAI_API_KEY")?;

    let endpoint = lookup("OPENAI_URL")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let model = match lookup("OPENAI_MODEL") {
        Some(m) if m.trim().is_empty() => return Err(ConfigError::EmptyModel.into()),
        Some(m) => m.trim().to_string(),
        None => DEFAULT_OPENAI_MODEL.to_string(),
    };

    let max_tokens = env_opt_u32(lookup, "LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);

    let temperature = env_opt_f32(lookup, "LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", t, 0.0, 2.0)?;
    }

    let timeout_secs = env_opt_u64(lookup, "LLM_TIMEOUT_SECS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key,
        max_tokens: Some(max_tokens),
        temperature,
        timeout_secs,
    })
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = config_openai_chat_from(&lookup(&[])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = config_openai_chat_from(&lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.endpoint, DEFAULT_OPENAI_URL);
        assert_eq!(cfg.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(cfg.max_tokens, Some(DEFAULT_MAX_TOKENS));
        assert_eq!(cfg.temperature, None);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn overrides_are_validated() {
        let cfg = config_openai_chat_from(&lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_URL", "http://127.0.0.1:9000"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("LLM_MAX_TOKENS", "128"),
            ("LLM_TEMPERATURE", "0.3"),
            ("LLM_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://127.0.0.1:9000");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.max_tokens, Some(128));
        assert_eq!(cfg.temperature, Some(0.3));
        assert_eq!(cfg.timeout_secs, Some(15));

        let bad_url = config_openai_chat_from(&lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_URL", "ftp://example.org"),
        ]));
        assert!(bad_url.is_err());

        let hot = config_openai_chat_from(&lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("LLM_TEMPERATURE", "3.5"),
        ]));
        assert!(hot.is_err());

        let blank_model = config_openai_chat_from(&lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", " "),
        ]));
        assert!(matches!(
            blank_model,
            Err(AiLlmError::Config(ConfigError::EmptyModel))
        ));
    }
}

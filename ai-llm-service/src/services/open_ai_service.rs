//! OpenAI chat-completion service.
//!
//! Minimal, non-streaming client around the OpenAI REST API. The endpoint is
//! derived from `LlmModelConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions
//!
//! Constructor validation:
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.api_key` must be encodable as a header value
//!
//! One call per [`OpenAiService::chat_completion`]: no retry, no streaming.
//! The response body is handed back verbatim as a [`ProviderResponse`],
//! including provider-reported errors (quota, invalid model, ...).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ProviderError, ProviderErrorKind, make_snippet},
    provider_response::ProviderResponse,
};

/// System + user message pair sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Thin client for the OpenAI API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (default headers, optional timeout).
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections.
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`AiLlmError::Provider`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`AiLlmError::Provider`] with `InvalidApiKeyHeader` if the key is not header-safe
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(
                ProviderError::new(ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone())).into(),
            );
        }

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidApiKeyHeader(e.to_string())))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        // No timeout unless configured: a hung provider keeps the request open.
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let url_chat = format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'));

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            max_tokens = ?cfg.max_tokens,
            timeout_secs = ?cfg.timeout_secs,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Model identifier used for every request.
    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Performs one **non-streaming** chat completion request.
    ///
    /// The body is returned unchanged whatever the HTTP status, as long as it
    /// is JSON: OpenAI reports quota and validation failures as JSON
    /// `{"error": {...}}` bodies, and those are the provider's answer.
    ///
    /// # Errors
    /// - [`AiLlmError::HttpTransport`] for connect/TLS/body-read failures
    /// - [`AiLlmError::Provider`] with `Decode` if the body is not JSON
    #[instrument(skip_all, fields(model = %self.cfg.model, user_len = prompt.user.len()))]
    pub async fn chat_completion(&self, prompt: &ChatPrompt) -> Result<ProviderResponse, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(
            system_len = prompt.system.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let out = match ProviderResponse::from_json_str(&text) {
            Ok(v) => v,
            Err(e) => {
                error!(
                    %status,
                    error = %e,
                    snippet = %make_snippet(&text),
                    latency_ms = started.elapsed().as_millis(),
                    "provider returned a non-JSON body"
                );
                return Err(ProviderError::new(ProviderErrorKind::Decode(format!(
                    "HTTP {status}: {e}"
                )))
                .into());
            }
        };

        if let Some(message) = out.error_message() {
            warn!(
                %status,
                %message,
                latency_ms = started.elapsed().as_millis(),
                "provider reported an application error"
            );
        } else if !status.is_success() {
            warn!(
                %status,
                latency_ms = started.elapsed().as_millis(),
                "provider returned non-success status with a JSON body"
            );
        } else {
            info!(
                %status,
                latency_ms = started.elapsed().as_millis(),
                "chat completion completed"
            );
        }

        Ok(out)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a ChatPrompt) -> Self {
        Self {
            model: &cfg.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

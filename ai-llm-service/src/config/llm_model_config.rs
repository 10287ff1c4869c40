/// Configuration for a chat-completion provider.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-3.5-turbo"`).
/// - `endpoint`: Provider base URL; `/v1/chat/completions` is appended.
/// - `api_key`: Bearer credential sent on every request.
/// - `max_tokens`: Upper bound on generated tokens per answer.
/// - `temperature`: Optional sampling temperature.
/// - `timeout_secs`: Optional request timeout; `None` keeps the transport default.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-3.5-turbo".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: "sk-...".to_string(),
///     max_tokens: Some(500),
///     temperature: None,
///     timeout_secs: None,
/// };
/// assert_eq!(cfg.max_tokens, Some(500));
/// ```
#[derive(Clone)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Provider base URL (scheme + host, optional path prefix).
    pub endpoint: String,

    /// API key for the `Authorization: Bearer` header.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

// The API key never reaches logs.
impl std::fmt::Debug for LlmModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmModelConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

//! Chat-completion client for OpenAI-compatible providers.
//!
//! - [`config`]: provider settings resolved from environment variables
//! - [`services::open_ai_service`]: single non-streaming `/v1/chat/completions` call
//! - [`provider_response`]: the provider's raw JSON body, kept verbatim
//! - [`telemetry`]: a `tracing` layer scoped to this crate's events

pub mod config;
pub mod error_handler;
pub mod provider_response;
pub mod services;
pub mod telemetry;

pub use config::default_config::config_openai_chat;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::AiLlmError;
pub use provider_response::ProviderResponse;
pub use services::open_ai_service::{ChatPrompt, OpenAiService};

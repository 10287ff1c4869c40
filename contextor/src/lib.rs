//! Question → provider answer over the whole reference corpus.
//!
//! Public API: [`Contextor::ask`]. It assembles the corpus into one chunked
//! context string, wraps it with the question into a [`PromptEnvelope`],
//! makes a single chat-completion call and returns the provider's body as is.

pub mod assemble;
pub mod cfg;
mod error;
pub mod prompt;

use std::time::Instant;

use ai_llm_service::{LlmModelConfig, OpenAiService, ProviderResponse};
use doc_corpus::Corpus;
use tracing::{debug, info, instrument};

pub use cfg::ContextorConfig;
pub use error::ContextorError;
pub use prompt::PromptEnvelope;

/// Completion gateway bound to one provider client and one deployment config.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Debug)]
pub struct Contextor {
    cfg: ContextorConfig,
    service: OpenAiService,
}

impl Contextor {
    /// # Errors
    /// [`ContextorError::Upstream`] if the provider client cannot be built.
    pub fn new(cfg: ContextorConfig, llm: LlmModelConfig) -> Result<Self, ContextorError> {
        let service = OpenAiService::new(llm)?;
        Ok(Self { cfg, service })
    }

    /// Builds the prompt for `question` without calling the provider.
    pub fn envelope(&self, question: &str, corpus: &Corpus) -> PromptEnvelope {
        let context = assemble::assemble(corpus.blocks(), self.cfg.chunk_size);
        PromptEnvelope::new(&self.cfg.system_prompt, question, &context)
    }

    /// Asks the provider about `question` with the full corpus as context.
    ///
    /// The context is rebuilt on every call. Provider-side failures reported
    /// as JSON are returned as `Ok` so the caller can relay them.
    ///
    /// # Errors
    /// [`ContextorError::Upstream`] on transport failures or a body that is
    /// not JSON.
    ///
    /// # Example
    /// ```no_run
    /// # use contextor::{Contextor, ContextorConfig};
    /// # #[tokio::main] async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let llm = ai_llm_service::config_openai_chat()?;
    /// let ctx = Contextor::new(ContextorConfig::from_env()?, llm)?;
    /// let corpus = doc_corpus::Corpus::new(vec!["PSA is a blood test.".into()]);
    /// let resp = ctx.ask("What is PSA?", &corpus).await?;
    /// println!("{}", resp.as_str());
    /// # Ok(()) }
    /// ```
    #[instrument(skip_all, fields(question_len = question.len(), documents = corpus.len(), model = %self.service.model()))]
    pub async fn ask(
        &self,
        question: &str,
        corpus: &Corpus,
    ) -> Result<ProviderResponse, ContextorError> {
        let envelope = self.envelope(question, corpus);
        debug!(question, user_chars = envelope.user.chars().count(), "prompt built");

        let started = Instant::now();
        let resp = self.service.chat_completion(&envelope.into()).await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            elapsed_ms,
            provider_error = resp.error_message().is_some(),
            answer_chars = resp.answer().map(|a| a.chars().count()).unwrap_or(0),
            "ask completed"
        );
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use ai_llm_service::AiLlmError;
    use axum::{Json, Router, extract::State, routing::post};
    use serde_json::Value;

    use super::*;

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn spawn_provider(body: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(move |State(seen): State<Seen>, Json(req): Json<Value>| async move {
                    seen.lock().unwrap().push(req);
                    ([("content-type", "application/json")], body)
                }),
            )
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{addr}"), seen)
    }

    fn llm(endpoint: String) -> LlmModelConfig {
        LlmModelConfig {
            model: "gpt-3.5-turbo".into(),
            endpoint,
            api_key: "sk-test".into(),
            max_tokens: Some(500),
            temperature: None,
            timeout_secs: Some(5),
        }
    }

    fn contextor(endpoint: String, chunk_size: usize) -> Contextor {
        let cfg = ContextorConfig {
            chunk_size,
            system_prompt: "You are a helpful assistant for MensHealthNZ.".into(),
        };
        Contextor::new(cfg, llm(endpoint)).unwrap()
    }

    #[tokio::test]
    async fn sends_chunked_corpus_and_relays_body() {
        let body = r#"{"id":"c1","choices":[{"message":{"role":"assistant","content":"See your GP."}}]}"#;
        let (url, seen) = spawn_provider(body).await;
        let ctx = contextor(url, 2);
        let corpus = Corpus::new(vec!["ab".into(), "c".into()]);

        let resp = ctx.ask("What next?", &corpus).await.unwrap();
        assert_eq!(resp.as_str(), body);

        let reqs = seen.lock().unwrap();
        assert_eq!(reqs.len(), 1);
        let messages = &reqs[0]["messages"];
        assert_eq!(messages[0]["content"], "You are a helpful assistant for MensHealthNZ.");
        assert_eq!(messages[1]["content"], "Question: What next?\nContext:\nab\n---\n\nc");
    }

    #[tokio::test]
    async fn empty_corpus_still_calls_provider() {
        let body = r#"{"choices":[{"message":{"content":"ok"}}]}"#;
        let (url, seen) = spawn_provider(body).await;
        let ctx = contextor(url, 2000);

        let resp = ctx.ask("hi", &Corpus::empty()).await.unwrap();
        assert_eq!(resp.answer().as_deref(), Some("ok"));
        assert_eq!(
            seen.lock().unwrap()[0]["messages"][1]["content"],
            "Question: hi\nContext:\n"
        );
    }

    #[tokio::test]
    async fn unreachable_provider_is_upstream_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let ctx = contextor(format!("http://{addr}"), 2000);
        let err = ctx.ask("hi", &Corpus::empty()).await.unwrap_err();
        assert!(matches!(
            err,
            ContextorError::Upstream(AiLlmError::HttpTransport(_))
        ));
    }

    #[test]
    fn invalid_endpoint_fails_construction() {
        let err = Contextor::new(ContextorConfig::default(), llm("ftp://nope".into())).unwrap_err();
        assert!(matches!(err, ContextorError::Upstream(AiLlmError::Provider(_))));
    }
}

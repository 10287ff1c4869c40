use std::process::ExitCode;

use ai_llm_service::telemetry;
use contextor::{Contextor, ContextorConfig};
use doc_corpus::{Corpus, CorpusConfig};
use tracing::{error, info, warn};
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file, if there is one.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            "info",
        ))
        .with(
            fmt::layer()
                .with_target(false)
                .with_filter(filter::filter_fn(|meta| {
                    !telemetry::is_library_target(meta.target())
                })),
        )
        .with(telemetry::layer())
        .init();

    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!(error = %e, ".env file could not be read");
        }
    }

    // Provider settings first: without an API key there is nothing to serve.
    let llm = match ai_llm_service::config_openai_chat() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "completion provider is not configured");
            return ExitCode::FAILURE;
        }
    };

    let server_cfg = match api::ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let contextor = match ContextorConfig::from_env().and_then(|cfg| Contextor::new(cfg, llm)) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to build completion gateway");
            return ExitCode::FAILURE;
        }
    };

    let corpus = load_corpus().await;

    match api::start(server_cfg, api::AppState::new(corpus, contextor)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server terminated");
            ExitCode::FAILURE
        }
    }
}

/// Loads the reference corpus. Any failure leaves the corpus empty; the
/// server still starts and answers with an empty context.
async fn load_corpus() -> Corpus {
    let cfg = match CorpusConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "invalid corpus configuration, starting with an empty corpus");
            return Corpus::empty();
        }
    };

    match doc_corpus::load(&cfg).await {
        Ok(report) => {
            info!(
                documents = report.loaded_count(),
                failed = report.failed_count(),
                "reference documents ready"
            );
            report.corpus
        }
        Err(e) => {
            warn!(error = %e, "corpus load failed, starting with an empty corpus");
            Corpus::empty()
        }
    }
}

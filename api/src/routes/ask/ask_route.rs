//! POST /ask: answers a question over the reference corpus.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::AskRequest,
};

/// Handler: POST /ask
///
/// Relays the provider's JSON body unchanged with status 200.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What does stage 2 mean?"}'
/// ```
pub async fn ask(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(req) = body?;
    let question = req
        .question()
        .ok_or_else(|| AppError::BadRequest("question is missing or blank".into()))?;

    info!(question_len = question.len(), "question received");

    let resp = state.contextor.ask(question, &state.corpus).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        resp.as_str().to_owned(),
    )
        .into_response())
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::domain::{AnimalRecord, AnswerSet, ApplicationSubmission};
use super::service::AdoptionApplicationService;
use super::suggestions::{draft_rejection_reasons, SuggestionEntry};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) animal: AnimalRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionsRequest {
    #[serde(default)]
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct SuggestionsResponse {
    pub(crate) entries: Vec<SuggestionEntry>,
    pub(crate) rejection_reasons: Vec<String>,
}

/// Router builder exposing the scoring endpoints.
pub fn application_router(service: Arc<AdoptionApplicationService>) -> Router {
    Router::new()
        .route(
            "/api/v1/adoption/applications/evaluate",
            post(evaluate_handler),
        )
        .route("/api/v1/adoption/applications/score", post(score_handler))
        .route(
            "/api/v1/adoption/applications/suggestions",
            post(suggestions_handler),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<AdoptionApplicationService>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let outcome = service.evaluate(submission, today)?;
    Ok((StatusCode::OK, axum::Json(outcome)).into_response())
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AdoptionApplicationService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let age = request.animal.age_signal(Local::now().date_naive());
    let result = service.score(&request.answers, age);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn suggestions_handler(
    State(service): State<Arc<AdoptionApplicationService>>,
    axum::Json(request): axum::Json<SuggestionsRequest>,
) -> Response {
    let entries = service.suggestions(&request.answers);
    let rejection_reasons = draft_rejection_reasons(&entries);
    let body = SuggestionsResponse {
        entries,
        rejection_reasons,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

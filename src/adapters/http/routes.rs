//! HTTP routes for the decision API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::dto::{
    DecisionRequest, ErrorResponse, SavedDecisionResponse,
};
use crate::application::handlers::{
    DeleteDecisionCommand, DeleteDecisionHandler, EvaluateDecisionCommand,
    EvaluateDecisionHandler, GenerateFeedbackCommand, GenerateFeedbackHandler,
    GetDecisionHandler, GetDecisionQuery, ListDecisionsHandler, SaveDecisionCommand,
    SaveDecisionHandler,
};
use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, FeedbackProvider, StorageError};

/// Shared handler wiring for the decision API.
#[derive(Clone)]
pub struct AppState {
    pub evaluate: Arc<EvaluateDecisionHandler>,
    pub feedback: Arc<GenerateFeedbackHandler>,
    pub save: Arc<SaveDecisionHandler>,
    pub get: Arc<GetDecisionHandler>,
    pub list: Arc<ListDecisionsHandler>,
    pub delete: Arc<DeleteDecisionHandler>,
}

impl AppState {
    /// Wires all handlers from the two ports.
    pub fn new(
        repository: Arc<dyn DecisionRepository>,
        provider: Arc<dyn FeedbackProvider>,
    ) -> Self {
        Self {
            evaluate: Arc::new(EvaluateDecisionHandler::new()),
            feedback: Arc::new(GenerateFeedbackHandler::new(provider)),
            save: Arc::new(SaveDecisionHandler::new(repository.clone())),
            get: Arc::new(GetDecisionHandler::new(repository.clone())),
            list: Arc::new(ListDecisionsHandler::new(repository.clone())),
            delete: Arc::new(DeleteDecisionHandler::new(repository)),
        }
    }
}

/// Creates the API router with all routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // GET /api/health
        .route("/api/health", get(health))
        // POST /api/decisions/evaluate
        .route("/api/decisions/evaluate", post(evaluate_decision))
        // POST /api/feedback
        .route("/api/feedback", post(generate_feedback))
        // POST /api/decisions + GET /api/decisions
        .route("/api/decisions", post(save_decision).get(list_decisions))
        // GET /api/decisions/:id + DELETE /api/decisions/:id
        .route(
            "/api/decisions/:id",
            get(get_decision).delete(delete_decision),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

async fn evaluate_decision(
    State(state): State<AppState>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    match request.into_domain() {
        Ok(decision) => {
            let report = state.evaluate.handle(EvaluateDecisionCommand { decision });
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(error) => bad_request(error.to_string()),
    }
}

async fn generate_feedback(
    State(state): State<AppState>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    match request.into_domain() {
        Ok(decision) => {
            let feedback = state
                .feedback
                .handle(GenerateFeedbackCommand { decision })
                .await;
            (StatusCode::OK, Json(feedback)).into_response()
        }
        Err(error) => bad_request(error.to_string()),
    }
}

async fn save_decision(
    State(state): State<AppState>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    let decision = match request.into_domain() {
        Ok(decision) => decision,
        Err(error) => return bad_request(error.to_string()),
    };

    match state.save.handle(SaveDecisionCommand { decision }).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(SavedDecisionResponse::from(&record)),
        )
            .into_response(),
        Err(error) => storage_error(error),
    }
}

async fn list_decisions(State(state): State<AppState>) -> Response {
    match state.list.handle().await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(error) => storage_error(error),
    }
}

async fn get_decision(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<DecisionId>() else {
        return bad_request("invalid decision id");
    };

    match state.get.handle(GetDecisionQuery { id }).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => not_found(&id),
        Err(error) => storage_error(error),
    }
}

async fn delete_decision(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<DecisionId>() else {
        return bad_request("invalid decision id");
    };

    match state.delete.handle(DeleteDecisionCommand { id }).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Decision deleted" })))
            .into_response(),
        Err(error) => storage_error(error),
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn not_found(id: &DecisionId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Decision", &id.to_string())),
    )
        .into_response()
}

fn storage_error(error: StorageError) -> Response {
    match error {
        StorageError::NotFound(id) => not_found(&id),
        StorageError::Backend(message) => {
            tracing::error!(%message, "storage backend failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("storage failure")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockFeedbackProvider;
    use crate::adapters::storage::InMemoryDecisionRepository;

    #[test]
    fn router_builds_with_wired_state() {
        let state = AppState::new(
            Arc::new(InMemoryDecisionRepository::new()),
            Arc::new(MockFeedbackProvider::new()),
        );
        let _router = api_routes(state);
    }
}

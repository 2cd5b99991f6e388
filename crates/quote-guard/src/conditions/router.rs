use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CommitRequest, WorkType};
use super::gate::GateError;
use super::repository::{ConditionRepository, ReviewRepository};
use super::service::{ConditionReviewService, ConditionServiceError};

const DEFAULT_HISTORY_PAGE: usize = 10;

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewPayload {
    pub(crate) text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    pub(crate) limit: Option<usize>,
}

/// Router builder exposing review, commit and listing endpoints.
pub fn condition_router<R, C>(service: Arc<ConditionReviewService<R, C>>) -> Router
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/conditions/reviews",
            post(review_handler::<R, C>).get(history_handler::<R, C>),
        )
        .route("/api/v1/conditions", post(commit_handler::<R, C>))
        .route(
            "/api/v1/conditions/:work_type",
            get(list_handler::<R, C>),
        )
        .with_state(service)
}

pub(crate) async fn review_handler<R, C>(
    State(service): State<Arc<ConditionReviewService<R, C>>>,
    Json(payload): Json<ReviewPayload>,
) -> Response
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    match service.review(&payload.text) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<R, C>(
    State(service): State<Arc<ConditionReviewService<R, C>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_PAGE);
    match service.recent_reviews(limit) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn commit_handler<R, C>(
    State(service): State<Arc<ConditionReviewService<R, C>>>,
    Json(request): Json<CommitRequest>,
) -> Response
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    match service.commit(request) {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R, C>(
    State(service): State<Arc<ConditionReviewService<R, C>>>,
    Path(work_type): Path<String>,
) -> Response
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    let work_type = match work_type.parse::<WorkType>() {
        Ok(work_type) => work_type,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    match service.conditions(work_type) {
        Ok(conditions) => (StatusCode::OK, Json(conditions)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ConditionServiceError) -> Response {
    let status = match &err {
        ConditionServiceError::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
        ConditionServiceError::Gate(GateError::AnalysisRequired) => {
            StatusCode::PRECONDITION_REQUIRED
        }
        ConditionServiceError::Gate(GateError::OverrideRequired { .. }) => StatusCode::CONFLICT,
        ConditionServiceError::Gate(GateError::Blocked { .. }) => StatusCode::FORBIDDEN,
        ConditionServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = match &err {
        ConditionServiceError::Gate(GateError::OverrideRequired { level })
        | ConditionServiceError::Gate(GateError::Blocked { level }) => json!({
            "error": err.to_string(),
            "level": level,
        }),
        _ => json!({ "error": err.to_string() }),
    };

    (status, Json(payload)).into_response()
}

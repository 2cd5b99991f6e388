use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json};
use quote_guard::conditions::{
    condition_router, ConditionRepository, ConditionReviewService, ReviewRepository,
};
use quote_guard::risk::{
    analyze_risk, risk_level_catalog, risk_level_info, suggestions_for, RiskLevel, RiskLevelInfo,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RiskLevelView {
    #[serde(flatten)]
    pub(crate) info: RiskLevelInfo,
    pub(crate) suggestions: &'static [&'static str],
}

impl From<RiskLevelInfo> for RiskLevelView {
    fn from(info: RiskLevelInfo) -> Self {
        Self {
            suggestions: suggestions_for(info.level),
            info,
        }
    }
}

pub(crate) fn with_condition_routes<R, C>(
    service: Arc<ConditionReviewService<R, C>>,
) -> axum::Router
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    condition_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/risk/analyze", post(analyze_endpoint))
        .route("/api/v1/risk/levels", get(levels_endpoint))
        .route("/api/v1/risk/levels/:level", get(level_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless analysis; nothing is recorded in the review history.
pub(crate) async fn analyze_endpoint(Json(payload): Json<AnalyzeRequest>) -> Response {
    let text = payload.text.trim();
    if text.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "condition text must not be empty" })),
        )
            .into_response();
    }

    (StatusCode::OK, Json(analyze_risk(text))).into_response()
}

pub(crate) async fn levels_endpoint() -> Json<Vec<RiskLevelView>> {
    Json(
        risk_level_catalog()
            .into_iter()
            .map(RiskLevelView::from)
            .collect(),
    )
}

pub(crate) async fn level_endpoint(Path(level): Path<String>) -> Response {
    match level.parse::<RiskLevel>() {
        Ok(level) => Json(RiskLevelView::from(risk_level_info(level))).into_response(),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

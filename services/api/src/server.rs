use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryConditionRepository, InMemoryReviewRepository};
use crate::routes::with_condition_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use quote_guard::conditions::{ConditionReviewService, DecisionGate};
use quote_guard::config::AppConfig;
use quote_guard::error::AppError;
use quote_guard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let reviews = Arc::new(InMemoryReviewRepository::new(config.review.history_limit));
    let conditions = Arc::new(InMemoryConditionRepository::default());
    let review_service = Arc::new(ConditionReviewService::new(
        reviews,
        conditions,
        DecisionGate::new(config.review.gate_mode),
    ));

    let app = with_condition_routes(review_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        gate_mode = ?config.review.gate_mode,
        history_limit = config.review.history_limit,
        "quote guard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

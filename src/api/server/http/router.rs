use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::StatusCode;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use super::{
    handlers::{health, solve},
    middleware::{error, logging},
    state::AppState,
};

/// 请求体上限
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/api/solve", post(solve::solve))
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(middleware::from_fn(error::error_handling_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

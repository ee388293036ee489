use axum::{http::StatusCode, response::Json};
use serde_json::json;

use crate::services::algorithm::Algorithm;

pub async fn check() -> (StatusCode, Json<serde_json::Value>) {
    let algorithms: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::name).collect();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "pathtrace",
            "version": env!("CARGO_PKG_VERSION"),
            "algorithms": algorithms,
        })),
    )
}

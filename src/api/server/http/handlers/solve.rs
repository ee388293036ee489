use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::Json as JsonResponse,
};
use tokio::task;

use crate::api::server::http::{error::HttpError, state::AppState};
use crate::api::service::SolveRequest;
use crate::services::algorithm::Trace;

/// 运行一次求解，返回完整轨迹
///
/// 引擎是同步 CPU 任务，放到阻塞线程池执行
pub async fn solve(
    State(state): State<AppState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<JsonResponse<Trace>, HttpError> {
    let Json(request) = payload.map_err(|e| HttpError::BadRequest(e.body_text()))?;

    let trace = task::spawn_blocking(move || state.service.execute(&request))
        .await
        .map_err(|e| HttpError::InternalError(format!("solve task failed: {}", e)))??;

    Ok(JsonResponse(trace))
}

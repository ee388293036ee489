use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// 每个请求一条访问日志：方法、路径、状态码与耗时
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}

use axum::{extract::Request, middleware::Next, response::Response};
use log::{debug, error};

/// 服务端错误记为 error，客户端输入错误只在 debug 级别记录
pub async fn error_handling_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        error!("{} {} returned {}", method, path, status);
    } else if status.is_client_error() {
        debug!("{} {} rejected with {}", method, path, status);
    }

    response
}

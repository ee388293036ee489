//! API模块集成测试
//!
//! 测试范围:
//! - api::service - 请求校验与分派
//! - api::server::http - 路由、状态码映射、响应格式

#![cfg(feature = "server")]

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pathtrace::api::server::{create_router, AppState};
use pathtrace::api::service::SolveService;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    create_router(
        AppState::new(SolveService::default()),
        Duration::from_secs(5),
    )
}

async fn post_solve(body: Value) -> (StatusCode, Value) {
    post_raw(body.to_string()).await
}

async fn post_raw(body: String) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/solve")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .expect("构建请求失败"),
        )
        .await
        .expect("路由调用失败");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("读取响应失败");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ==================== 健康检查 ====================

#[tokio::test]
async fn test_health_check() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("构建请求失败"),
        )
        .await
        .expect("路由调用失败");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("读取响应失败");
    let body: Value = serde_json::from_slice(&bytes).expect("响应不是 JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pathtrace");
}

// ==================== 求解接口 ====================

#[tokio::test]
async fn test_solve_returns_trace() {
    let (status, body) = post_solve(json!({
        "graph": common::diamond_json(),
        "startNode": "A",
        "endNode": "D",
        "algorithm": "dijkstra"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);

    let events = body.as_array().expect("轨迹应为数组");
    assert_eq!(events[0]["type"], "init");
    let last = events.last().expect("轨迹为空");
    assert_eq!(last["type"], "final");
    assert_eq!(last["path"], json!(["A", "B", "C", "D"]));
    assert_eq!(last["cost"], 4);
    assert_eq!(last["nodes_visited"], 4);
    assert_eq!(last["all_distances"]["D"], 4);
}

#[tokio::test]
async fn test_unreached_cost_renders_as_infinity() {
    let (status, body) = post_solve(json!({
        "graph": common::diamond_json(),
        "startNode": "D",
        "endNode": "A",
        "algorithm": "a_star"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    let last = body
        .as_array()
        .and_then(|events| events.last())
        .expect("轨迹为空");
    assert_eq!(last["cost"], "∞");
    assert_eq!(last["path"], json!([]));
}

#[tokio::test]
async fn test_negative_cycle_is_not_an_error() {
    let (status, body) = post_solve(json!({
        "graph": common::negative_cycle_json(),
        "startNode": "A",
        "endNode": "D",
        "algorithm": "bellman_ford"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().expect("轨迹应为数组");
    assert_eq!(
        events.last().map(|event| event["type"].clone()),
        Some(json!("negative_cycle"))
    );
    assert!(events.iter().all(|event| event["type"] != "final"));
}

#[tokio::test]
async fn test_bidirectional_events_carry_direction() {
    let (status, body) = post_solve(json!({
        "graph": {
            "nodes": [{"id": "S"}, {"id": "M"}, {"id": "T"}],
            "edges": [
                {"from": "S", "to": "M", "label": "2"},
                {"from": "M", "to": "T", "label": "2"}
            ]
        },
        "startNode": "S",
        "endNode": "T",
        "algorithm": "bidirectional"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().expect("轨迹应为数组");
    assert!(events
        .iter()
        .filter(|event| event["type"] == "visit")
        .all(|event| event["direction"] == "fwd" || event["direction"] == "bwd"));
    assert!(events.iter().any(|event| event["type"] == "meet"));
    let last = events.last().expect("轨迹为空");
    assert_eq!(last["cost"], 4);
    assert!(last.get("all_distances").is_none());
}

// ==================== 错误映射 ====================

#[tokio::test]
async fn test_missing_parameters_is_bad_request() {
    let (status, body) = post_solve(json!({
        "graph": common::diamond_json(),
        "startNode": "A"
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("missing required parameters")));
}

#[tokio::test]
async fn test_invalid_algorithm_is_bad_request() {
    let (status, _) = post_solve(json!({
        "graph": common::diamond_json(),
        "startNode": "A",
        "endNode": "D",
        "algorithm": "prim"
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_node_is_bad_request() {
    let (status, body) = post_solve(json!({
        "graph": common::diamond_json(),
        "startNode": "Q",
        "endNode": "D",
        "algorithm": "dijkstra"
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("Q")));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = post_raw("{\"graph\": ".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_malformed_coordinates_is_server_error() {
    let (status, body) = post_solve(json!({
        "graph": {
            "nodes": [{"id": "A", "x": "left", "y": 0}, {"id": "B", "x": 1, "y": 1}],
            "edges": [{"from": "A", "to": "B", "label": "1"}]
        },
        "startNode": "A",
        "endNode": "B",
        "algorithm": "astar"
    }))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
}

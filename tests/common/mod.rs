//! 集成测试共享工具模块
//!
//! 提供图夹具、随机图生成和轨迹断言辅助函数

#![allow(dead_code)]

use pathtrace::core::{Distance, GraphData, GraphModel, NodeId};
use pathtrace::services::algorithm::{StepEvent, Trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

/// 由 JSON 构建图模型
pub fn model(value: Value) -> GraphModel {
    let data: GraphData = serde_json::from_value(value).expect("图 JSON 解析失败");
    GraphModel::from_data(&data).expect("图模型构建失败")
}

/// A→B(1), B→C(2), A→C(5), C→D(1)
pub fn diamond_json() -> Value {
    json!({
        "directed": true,
        "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
        "edges": [
            {"from": "A", "to": "B", "label": "1"},
            {"from": "B", "to": "C", "label": "2"},
            {"from": "A", "to": "C", "label": "5"},
            {"from": "C", "to": "D", "label": "1"}
        ]
    })
}

/// diamond 加上 C→A(-10)，形成可达负权环
pub fn negative_cycle_json() -> Value {
    let mut graph = diamond_json();
    if let Some(edges) = graph["edges"].as_array_mut() {
        edges.push(json!({"from": "C", "to": "A", "label": "-10"}));
    }
    graph
}

/// 带坐标的随机正权图
///
/// 坐标落在 500x500 内，缩放后任意两点的估计不超过 ~7.1，
/// 而每条边权重至少为 8，启发式不会高估
pub fn random_graph(seed: u64, nodes: usize, edges: usize, directed: bool) -> GraphModel {
    let mut rng = StdRng::seed_from_u64(seed);
    let node_list: Vec<Value> = (0..nodes)
        .map(|i| {
            json!({
                "id": format!("n{i}"),
                "x": rng.gen_range(0..500),
                "y": rng.gen_range(0..500)
            })
        })
        .collect();
    let edge_list: Vec<Value> = (0..edges)
        .map(|_| {
            let from = rng.gen_range(0..nodes);
            let to = rng.gen_range(0..nodes);
            json!({
                "from": format!("n{from}"),
                "to": format!("n{to}"),
                "label": rng.gen_range(8..40).to_string()
            })
        })
        .collect();
    model(json!({"directed": directed, "nodes": node_list, "edges": edge_list}))
}

/// 返回最终事件的 (路径, 代价, 已访问节点数)
pub fn final_summary(trace: &Trace) -> (Vec<String>, Distance, usize) {
    match trace.final_event() {
        Some(StepEvent::Final {
            path,
            cost,
            nodes_visited,
            ..
        }) => (
            path.iter().map(NodeId::to_string).collect(),
            *cost,
            *nodes_visited,
        ),
        other => panic!("轨迹未以 final 结尾: {other:?}"),
    }
}

/// 沿路径累加边权；某一步找不到对应边时返回 None
pub fn path_cost(graph: &GraphModel, path: &[String]) -> Option<i64> {
    path.windows(2).try_fold(0i64, |total, pair| {
        let weight = graph
            .edges()
            .iter()
            .filter(|edge| {
                (edge.from.as_str() == pair[0] && edge.to.as_str() == pair[1])
                    || (!graph.is_directed()
                        && edge.from.as_str() == pair[1]
                        && edge.to.as_str() == pair[0])
            })
            .map(|edge| edge.weight)
            .min()?;
        Some(total + weight)
    })
}

//! Bellman-Ford算法模块
//!
//! 直接扫描输入边列表（不镜像无向边），支持负权边，可检测负权环

use super::path::reconstruct_path;
use super::solver::SolveOptions;
use super::table::{relaxed_distance, DistanceTable};
use super::trace::{StepEvent, Trace};
use crate::core::{Distance, Edge, EngineResult, GraphModel, NodeId};

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 最多执行 |V|-1 轮松弛；某一轮无更新即提前结束
    ///
    /// 松弛结束后若仍有边可松弛，轨迹以 `NegativeCycleDetected` 结尾且不含 `Final`
    pub fn solve(
        graph: &GraphModel,
        start: &NodeId,
        end: &NodeId,
        options: &SolveOptions,
    ) -> EngineResult<Trace> {
        let mut table = DistanceTable::new(graph.node_ids(), start);
        let mut trace = Trace::new();

        trace.append(StepEvent::Init {
            start_node: start.clone(),
            all_distances: options.snapshot(&table),
        });

        let rounds = graph.node_count().saturating_sub(1);
        for number in 1..=rounds {
            trace.append(StepEvent::Iteration { number });

            let mut updated = false;
            for edge in graph.edges() {
                let Some(candidate) = Self::improvement(&table, edge)? else {
                    continue;
                };
                table.relax(&edge.to, candidate, &edge.from);
                updated = true;
                trace.append(StepEvent::UpdateDistance {
                    node: edge.to.clone(),
                    new_dist: candidate,
                    from: edge.from.clone(),
                    direction: None,
                    scores: None,
                    all_distances: options.snapshot(&table),
                });
            }

            if !updated {
                break;
            }
        }

        for edge in graph.edges() {
            if Self::improvement(&table, edge)?.is_some() {
                trace.append(StepEvent::NegativeCycleDetected {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
                return Ok(trace);
            }
        }

        trace.append(StepEvent::Final {
            path: reconstruct_path(table.predecessors(), start, end),
            cost: table.distance(end),
            nodes_visited: graph.node_count(),
            all_distances: Some(table.snapshot()),
        });
        Ok(trace)
    }

    /// 边 `from -> to` 能给出更短距离时返回候选值
    fn improvement(table: &DistanceTable, edge: &Edge) -> EngineResult<Option<i64>> {
        let Some(base) = table.distance(&edge.from).value() else {
            return Ok(None);
        };
        let candidate = relaxed_distance(base, edge.weight, &edge.from, &edge.to)?;
        Ok((Distance::Finite(candidate) < table.distance(&edge.to)).then_some(candidate))
    }
}

//! Dijkstra算法模块
//!
//! 带轨迹记录的单源最短路径搜索。默认跑完整个可达分量，
//! 最终事件报告所有节点的距离，而路径只针对终点重建

use std::collections::HashSet;

use super::adjacency::AdjacencyIndex;
use super::frontier::Frontier;
use super::path::reconstruct_path;
use super::solver::SolveOptions;
use super::table::{relaxed_distance, DistanceTable};
use super::trace::{StepEvent, Trace};
use crate::core::{Distance, EngineResult, GraphModel, NodeId};

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点出发的最短路径，并记录每一次状态变更
    pub fn solve(
        graph: &GraphModel,
        start: &NodeId,
        end: &NodeId,
        options: &SolveOptions,
    ) -> EngineResult<Trace> {
        let adjacency = AdjacencyIndex::build(graph);
        let mut table = DistanceTable::new(graph.node_ids(), start);
        let mut frontier: Frontier<i64> = Frontier::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut trace = Trace::new();

        trace.append(StepEvent::Init {
            start_node: start.clone(),
            all_distances: options.snapshot(&table),
        });
        frontier.push(0, start.clone());

        while let Some((distance, node)) = frontier.pop() {
            // 已定稿或过期的条目直接丢弃
            if visited.contains(&node) || table.distance(&node) != Distance::Finite(distance) {
                continue;
            }
            visited.insert(node.clone());
            trace.append(StepEvent::Visit {
                node: node.clone(),
                cost: distance,
                direction: None,
            });

            if options.stops_at(&node, end) {
                break;
            }

            for neighbor in adjacency.neighbors(&node) {
                trace.append(StepEvent::CheckEdge {
                    from: node.clone(),
                    to: neighbor.node.clone(),
                    weight: neighbor.weight,
                    direction: None,
                });

                // 负权自环可能在展开途中降低当前节点的距离，因此每次重新读取
                let Some(base) = table.distance(&node).value() else {
                    continue;
                };
                let candidate = relaxed_distance(base, neighbor.weight, &node, &neighbor.node)?;
                if Distance::Finite(candidate) < table.distance(&neighbor.node) {
                    table.relax(&neighbor.node, candidate, &node);
                    frontier.push(candidate, neighbor.node.clone());
                    trace.append(StepEvent::UpdateDistance {
                        node: neighbor.node.clone(),
                        new_dist: candidate,
                        from: node.clone(),
                        direction: None,
                        scores: None,
                        all_distances: options.snapshot(&table),
                    });
                }
            }
        }

        trace.append(StepEvent::Final {
            path: reconstruct_path(table.predecessors(), start, end),
            cost: table.distance(end),
            nodes_visited: visited.len(),
            all_distances: Some(table.snapshot()),
        });
        Ok(trace)
    }
}

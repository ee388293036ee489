//! A*搜索算法模块
//!
//! 与 Dijkstra 共享距离表与前驱表，队列按 f = g + h 排序

use std::cmp::Ordering;
use std::collections::HashSet;

use super::adjacency::AdjacencyIndex;
use super::frontier::Frontier;
use super::heuristic::HeuristicEvaluator;
use super::path::reconstruct_path;
use super::solver::SolveOptions;
use super::table::{relaxed_distance, DistanceTable};
use super::trace::{HeuristicScores, StepEvent, Trace};
use crate::core::{Distance, EngineResult, GraphModel, NodeId};

/// 优先队列键：先比较 f，f 相同时 g 小者优先
#[derive(Debug, Clone, Copy)]
struct ScoredKey {
    f: f64,
    g: i64,
}

impl PartialEq for ScoredKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredKey {}

impl PartialOrd for ScoredKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.g.cmp(&other.g))
    }
}

/// A*算法结构体
pub struct AStar;

impl AStar {
    pub fn solve(
        graph: &GraphModel,
        start: &NodeId,
        end: &NodeId,
        options: &SolveOptions,
    ) -> EngineResult<Trace> {
        let heuristic = HeuristicEvaluator::new(graph, end)?;
        let adjacency = AdjacencyIndex::build(graph);
        let mut table = DistanceTable::new(graph.node_ids(), start);
        let mut frontier: Frontier<ScoredKey> = Frontier::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut trace = Trace::new();

        trace.append(StepEvent::Init {
            start_node: start.clone(),
            all_distances: options.snapshot(&table),
        });
        frontier.push(
            ScoredKey {
                f: heuristic.estimate(start)?,
                g: 0,
            },
            start.clone(),
        );

        while let Some((key, node)) = frontier.pop() {
            if visited.contains(&node) || table.distance(&node) != Distance::Finite(key.g) {
                continue;
            }
            visited.insert(node.clone());
            trace.append(StepEvent::Visit {
                node: node.clone(),
                cost: key.g,
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

                let Some(base) = table.distance(&node).value() else {
                    continue;
                };
                let g_score = relaxed_distance(base, neighbor.weight, &node, &neighbor.node)?;
                if Distance::Finite(g_score) < table.distance(&neighbor.node) {
                    let h_score = heuristic.estimate(&neighbor.node)?;
                    let f_score = g_score as f64 + h_score;
                    table.relax(&neighbor.node, g_score, &node);
                    frontier.push(
                        ScoredKey {
                            f: f_score,
                            g: g_score,
                        },
                        neighbor.node.clone(),
                    );
                    trace.append(StepEvent::UpdateDistance {
                        node: neighbor.node.clone(),
                        new_dist: g_score,
                        from: node.clone(),
                        direction: None,
                        scores: Some(HeuristicScores {
                            g_score,
                            h_score,
                            f_score,
                        }),
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

//! 双向Dijkstra算法模块
//!
//! 前向搜索以起点为根，后向搜索以终点为根，两侧复用同一邻接索引。
//! 每轮展开待处理条目较少的一侧，当两侧最小键之和不小于当前最优
//! 相遇代价时停止。
//!
//! 相遇点总是至少在一侧已关闭：节点关闭时若另一侧距离有限则尝试相遇，
//! 松弛到另一侧已关闭的节点时同样尝试相遇

use std::collections::HashSet;

use super::adjacency::AdjacencyIndex;
use super::frontier::Frontier;
use super::path::{reconstruct_path, trace_back};
use super::solver::SolveOptions;
use super::table::{relaxed_distance, DistanceTable};
use super::trace::{SearchDirection, StepEvent, Trace};
use crate::core::{ComputationFault, Distance, EngineResult, GraphModel, NodeId};

/// 双向Dijkstra算法结构体
pub struct BidirectionalDijkstra;

/// 单侧搜索状态
struct DirectionalSearch {
    direction: SearchDirection,
    table: DistanceTable,
    frontier: Frontier<i64>,
    closed: HashSet<NodeId>,
}

impl DirectionalSearch {
    fn new(graph: &GraphModel, root: &NodeId, direction: SearchDirection) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(0, root.clone());
        Self {
            direction,
            table: DistanceTable::new(graph.node_ids(), root),
            frontier,
            closed: HashSet::new(),
        }
    }
}

/// 当前最优相遇点
struct Meeting {
    cost: Distance,
    node: Option<NodeId>,
}

impl BidirectionalDijkstra {
    pub fn solve(
        graph: &GraphModel,
        start: &NodeId,
        end: &NodeId,
        options: &SolveOptions,
    ) -> EngineResult<Trace> {
        let mut trace = Trace::new();

        if start == end {
            trace.append(StepEvent::Final {
                path: vec![start.clone()],
                cost: Distance::Finite(0),
                nodes_visited: 1,
                all_distances: None,
            });
            return Ok(trace);
        }

        trace.append(StepEvent::Init {
            start_node: start.clone(),
            all_distances: None,
        });

        let adjacency = AdjacencyIndex::build(graph);
        let mut forward = DirectionalSearch::new(graph, start, SearchDirection::Forward);
        let mut backward = DirectionalSearch::new(graph, end, SearchDirection::Backward);
        let mut meeting = Meeting {
            cost: Distance::Unreached,
            node: None,
        };

        while let (Some(forward_key), Some(backward_key)) = (
            forward.frontier.peek_key().copied(),
            backward.frontier.peek_key().copied(),
        ) {
            if let Some(best) = meeting.cost.value() {
                // i128 避免两侧键相加溢出
                if i128::from(forward_key) + i128::from(backward_key) >= i128::from(best) {
                    break;
                }
            }

            if forward.frontier.len() <= backward.frontier.len() {
                Self::expand(
                    &adjacency,
                    &mut forward,
                    &backward,
                    &mut meeting,
                    options,
                    &mut trace,
                )?;
            } else {
                Self::expand(
                    &adjacency,
                    &mut backward,
                    &forward,
                    &mut meeting,
                    options,
                    &mut trace,
                )?;
            }
        }

        let path = match &meeting.node {
            Some(node) => Self::stitch(&forward, &backward, start, end, node),
            None => Vec::new(),
        };
        let nodes_visited = forward.closed.union(&backward.closed).count();

        trace.append(StepEvent::Final {
            path,
            cost: meeting.cost,
            nodes_visited,
            all_distances: None,
        });
        Ok(trace)
    }

    /// 从 `search` 一侧弹出一个节点并展开
    fn expand(
        adjacency: &AdjacencyIndex,
        search: &mut DirectionalSearch,
        other: &DirectionalSearch,
        meeting: &mut Meeting,
        options: &SolveOptions,
        trace: &mut Trace,
    ) -> EngineResult<()> {
        let Some((distance, node)) = search.frontier.pop() else {
            return Ok(());
        };
        if search.closed.contains(&node)
            || search.table.distance(&node) != Distance::Finite(distance)
        {
            return Ok(());
        }
        search.closed.insert(node.clone());
        let direction = Some(search.direction);
        trace.append(StepEvent::Visit {
            node: node.clone(),
            cost: distance,
            direction,
        });
        if let Some(remaining) = other.table.distance(&node).value() {
            Self::offer_meeting(meeting, &node, distance, remaining, &node, trace)?;
        }

        for neighbor in adjacency.neighbors(&node) {
            trace.append(StepEvent::CheckEdge {
                from: node.clone(),
                to: neighbor.node.clone(),
                weight: neighbor.weight,
                direction,
            });

            let Some(base) = search.table.distance(&node).value() else {
                continue;
            };
            let candidate = relaxed_distance(base, neighbor.weight, &node, &neighbor.node)?;
            if Distance::Finite(candidate) >= search.table.distance(&neighbor.node) {
                continue;
            }

            search.table.relax(&neighbor.node, candidate, &node);
            search.frontier.push(candidate, neighbor.node.clone());
            trace.append(StepEvent::UpdateDistance {
                node: neighbor.node.clone(),
                new_dist: candidate,
                from: node.clone(),
                direction,
                scores: None,
                all_distances: options.snapshot(&search.table),
            });

            // 只与另一侧已关闭的节点相遇
            if !other.closed.contains(&neighbor.node) {
                continue;
            }
            if let Some(remaining) = other.table.distance(&neighbor.node).value() {
                Self::offer_meeting(meeting, &neighbor.node, candidate, remaining, &node, trace)?;
            }
        }

        Ok(())
    }

    /// `own + remaining` 优于当前最优时更新相遇点并记录 `Meet`
    fn offer_meeting(
        meeting: &mut Meeting,
        node: &NodeId,
        own: i64,
        remaining: i64,
        from: &NodeId,
        trace: &mut Trace,
    ) -> EngineResult<()> {
        let total = own
            .checked_add(remaining)
            .ok_or_else(|| ComputationFault::DistanceOverflow {
                from: from.clone(),
                to: node.clone(),
            })?;
        if Distance::Finite(total) < meeting.cost {
            meeting.cost = Distance::Finite(total);
            meeting.node = Some(node.clone());
            trace.append(StepEvent::Meet {
                node: node.clone(),
                cost: total,
            });
        }
        Ok(())
    }

    /// 拼接 start -> meet 的前向链与 meet -> end 的后向链
    fn stitch(
        forward: &DirectionalSearch,
        backward: &DirectionalSearch,
        start: &NodeId,
        end: &NodeId,
        meet: &NodeId,
    ) -> Vec<NodeId> {
        let mut path = reconstruct_path(forward.table.predecessors(), start, meet);
        if path.is_empty() {
            return path;
        }
        match trace_back(backward.table.predecessors(), meet, end) {
            Some(tail) => {
                path.extend(tail.into_iter().skip(1));
                path
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GraphData;
    use serde_json::json;
    use std::collections::HashMap;

    fn model(value: serde_json::Value) -> GraphModel {
        let data: GraphData = serde_json::from_value(value).expect("graph json");
        GraphModel::from_data(&data).expect("graph model")
    }

    fn detour_graph() -> GraphModel {
        model(json!({
            "nodes": [{"id": "S"}, {"id": "M"}, {"id": "T"}, {"id": "X"}],
            "edges": [
                {"from": "S", "to": "M", "label": "4"},
                {"from": "M", "to": "T", "label": "1"},
                {"from": "S", "to": "X", "label": "1"},
                {"from": "X", "to": "M", "label": "1"}
            ]
        }))
    }

    fn run(graph: &GraphModel, start: &str, end: &str) -> Trace {
        BidirectionalDijkstra::solve(
            graph,
            &NodeId::from(start),
            &NodeId::from(end),
            &SolveOptions::default(),
        )
        .expect("bidirectional should succeed in test")
    }

    #[test]
    fn test_meets_on_shortest_path() {
        let graph = detour_graph();
        let trace = run(&graph, "S", "T");

        let meets: Vec<(&str, i64)> = trace
            .events()
            .iter()
            .filter_map(|event| match event {
                StepEvent::Meet { node, cost } => Some((node.as_str(), *cost)),
                _ => None,
            })
            .collect();
        assert_eq!(meets, vec![("M", 5), ("X", 3)]);

        match trace.final_event() {
            Some(StepEvent::Final {
                path,
                cost,
                nodes_visited,
                all_distances,
            }) => {
                let path: Vec<&str> = path.iter().map(NodeId::as_str).collect();
                assert_eq!(path, vec!["S", "X", "M", "T"]);
                assert_eq!(*cost, Distance::Finite(3));
                assert_eq!(*nodes_visited, 4);
                assert!(all_distances.is_none());
            }
            other => panic!("expected final event, got {other:?}"),
        }
    }

    #[test]
    fn test_meet_nodes_are_closed_in_one_direction() {
        let graph = detour_graph();
        let trace = run(&graph, "S", "T");
        let mut visited: Vec<&str> = Vec::new();
        let mut meets = 0;
        for event in trace.events() {
            match event {
                StepEvent::Visit { node, .. } => visited.push(node.as_str()),
                StepEvent::Meet { node, .. } => {
                    meets += 1;
                    assert!(
                        visited.contains(&node.as_str()),
                        "meet at {node} before it was visited in either direction"
                    );
                }
                _ => {}
            }
        }
        assert!(meets > 0);
    }

    #[test]
    fn test_label_on_other_side_is_not_a_meeting() {
        // 后向从 T 松弛 M 时，M 只在前向被标记而未关闭
        let graph = detour_graph();
        let trace = run(&graph, "S", "T");
        let events = trace.events();
        let update = events
            .iter()
            .position(|event| {
                matches!(
                    event,
                    StepEvent::UpdateDistance {
                        node,
                        direction: Some(SearchDirection::Backward),
                        ..
                    } if node.as_str() == "M"
                )
            })
            .expect("backward update of M");
        assert!(!matches!(events.get(update + 1), Some(StepEvent::Meet { .. })));
    }

    #[test]
    fn test_chain_meets_when_one_side_sweeps() {
        // 前向一路展开到终点，后向尚未关闭任何节点
        let graph = model(json!({
            "nodes": [{"id": "S"}, {"id": "A"}, {"id": "B"}, {"id": "T"}],
            "edges": [
                {"from": "S", "to": "A", "label": "1"},
                {"from": "A", "to": "B", "label": "2"},
                {"from": "B", "to": "T", "label": "3"}
            ]
        }));
        let trace = run(&graph, "S", "T");
        match trace.final_event() {
            Some(StepEvent::Final { path, cost, .. }) => {
                let path: Vec<&str> = path.iter().map(NodeId::as_str).collect();
                assert_eq!(path, vec!["S", "A", "B", "T"]);
                assert_eq!(*cost, Distance::Finite(6));
            }
            other => panic!("expected final event, got {other:?}"),
        }
    }

    #[test]
    fn test_updates_are_consistent_per_direction() {
        // 回放每个方向的更新：每次都必须严格降低该方向自己的距离
        let graph = detour_graph();
        let trace = run(&graph, "S", "T");
        let mut tables: HashMap<SearchDirection, HashMap<&str, i64>> = HashMap::new();
        tables.entry(SearchDirection::Forward).or_default().insert("S", 0);
        tables.entry(SearchDirection::Backward).or_default().insert("T", 0);

        for event in trace.events() {
            if let StepEvent::UpdateDistance {
                node,
                new_dist,
                from,
                direction: Some(direction),
                ..
            } = event
            {
                let table = tables.entry(*direction).or_default();
                assert!(table.contains_key(from.as_str()));
                if let Some(previous) = table.get(node.as_str()) {
                    assert!(new_dist < previous, "{node} did not decrease in {direction:?}");
                }
                table.insert(node.as_str(), *new_dist);
            }
        }

        assert_eq!(tables[&SearchDirection::Backward].get("S"), Some(&5));
        assert_eq!(tables[&SearchDirection::Forward].get("X"), Some(&1));
    }

    #[test]
    fn test_events_carry_direction() {
        let graph = detour_graph();
        let trace = run(&graph, "S", "T");
        for event in trace.events() {
            match event {
                StepEvent::Visit { direction, .. }
                | StepEvent::CheckEdge { direction, .. }
                | StepEvent::UpdateDistance { direction, .. } => assert!(direction.is_some()),
                _ => {}
            }
        }
    }

    #[test]
    fn test_start_equals_end_short_circuits() {
        let graph = detour_graph();
        let trace = run(&graph, "S", "S");
        assert_eq!(trace.len(), 1);
        match trace.final_event() {
            Some(StepEvent::Final {
                path,
                cost,
                nodes_visited,
                ..
            }) => {
                assert_eq!(path, &vec![NodeId::from("S")]);
                assert_eq!(*cost, Distance::Finite(0));
                assert_eq!(*nodes_visited, 1);
            }
            other => panic!("expected final event, got {other:?}"),
        }
    }

    #[test]
    fn test_disconnected_has_no_meeting() {
        let graph = model(json!({
            "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}, {"id": "D"}],
            "edges": [
                {"from": "A", "to": "B", "label": "1"},
                {"from": "C", "to": "D", "label": "1"}
            ]
        }));
        let trace = run(&graph, "A", "D");
        assert!(trace
            .events()
            .iter()
            .all(|event| !matches!(event, StepEvent::Meet { .. })));
        match trace.final_event() {
            Some(StepEvent::Final { path, cost, .. }) => {
                assert!(path.is_empty());
                assert_eq!(*cost, Distance::Unreached);
            }
            other => panic!("expected final event, got {other:?}"),
        }
    }

    #[test]
    fn test_adjacent_nodes() {
        let graph = model(json!({
            "nodes": [{"id": "A"}, {"id": "B"}],
            "edges": [{"from": "A", "to": "B", "label": "7"}]
        }));
        let trace = run(&graph, "A", "B");
        match trace.final_event() {
            Some(StepEvent::Final { path, cost, .. }) => {
                let path: Vec<&str> = path.iter().map(NodeId::as_str).collect();
                assert_eq!(path, vec!["A", "B"]);
                assert_eq!(*cost, Distance::Finite(7));
            }
            other => panic!("expected final event, got {other:?}"),
        }
    }
}

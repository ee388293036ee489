//! 距离表模块
//!
//! 距离与前驱在同一次操作中更新，保证二者始终一致

use std::collections::HashMap;

use super::trace::DistanceSnapshot;
use crate::core::{ComputationFault, Distance, EngineResult, NodeId};

/// 前驱表：节点 -> 最短路径上的前一个节点
pub type PredecessorTable = HashMap<NodeId, NodeId>;

/// 距离表，附带前驱表
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: HashMap<NodeId, Distance>,
    predecessors: PredecessorTable,
}

impl DistanceTable {
    /// 所有节点初始化为未到达，源点为 0
    pub fn new<'a, I>(nodes: I, source: &NodeId) -> Self
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let mut distances: HashMap<NodeId, Distance> = nodes
            .into_iter()
            .map(|node| (node.clone(), Distance::Unreached))
            .collect();
        distances.insert(source.clone(), Distance::Finite(0));
        Self {
            distances,
            predecessors: PredecessorTable::new(),
        }
    }

    pub fn distance(&self, node: &NodeId) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Unreached)
    }

    /// 以更小的距离覆盖节点，并记录前驱
    pub fn relax(&mut self, node: &NodeId, distance: i64, from: &NodeId) {
        debug_assert!(Distance::Finite(distance) < self.distance(node));
        self.distances
            .insert(node.clone(), Distance::Finite(distance));
        self.predecessors.insert(node.clone(), from.clone());
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    pub fn snapshot(&self) -> DistanceSnapshot {
        self.distances
            .iter()
            .map(|(node, distance)| (node.clone(), *distance))
            .collect()
    }
}

/// 沿边 `from -> to` 延伸距离，溢出时报告内部故障
pub fn relaxed_distance(
    base: i64,
    weight: i64,
    from: &NodeId,
    to: &NodeId,
) -> EngineResult<i64> {
    base.checked_add(weight)
        .ok_or_else(|| ComputationFault::DistanceOverflow {
            from: from.clone(),
            to: to.clone(),
        })
}

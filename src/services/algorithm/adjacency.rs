//! 邻接索引模块
//!
//! 每次求解构建一次，之后只读

use std::collections::HashMap;

use crate::core::{GraphModel, NodeId};

/// 出边邻居及其权重
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: i64,
}

/// 节点 -> 有序邻居列表
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: HashMap<NodeId, Vec<Neighbor>>,
}

impl AdjacencyIndex {
    /// 按边的输入顺序构建；无向图中每条边 (u,v,w) 同时写入 u->v 与 v->u
    pub fn build(graph: &GraphModel) -> Self {
        let mut neighbors: HashMap<NodeId, Vec<Neighbor>> = graph
            .node_ids()
            .map(|id| (id.clone(), Vec::new()))
            .collect();

        for edge in graph.edges() {
            neighbors
                .entry(edge.from.clone())
                .or_default()
                .push(Neighbor {
                    node: edge.to.clone(),
                    weight: edge.weight,
                });
            if !graph.is_directed() {
                neighbors
                    .entry(edge.to.clone())
                    .or_default()
                    .push(Neighbor {
                        node: edge.from.clone(),
                        weight: edge.weight,
                    });
            }
        }

        Self { neighbors }
    }

    pub fn neighbors(&self, node: &NodeId) -> &[Neighbor] {
        self.neighbors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.neighbors.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

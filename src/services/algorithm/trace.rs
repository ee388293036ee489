//! 轨迹模块
//!
//! 所有引擎共享的步骤事件模型。事件按状态表变更的顺序追加，
//! 调用方据此逐步回放算法的收敛过程

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Distance, NodeId};

/// 距离表快照，按节点 id 排序
pub type DistanceSnapshot = BTreeMap<NodeId, Distance>;

/// 双向搜索的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchDirection {
    #[serde(rename = "fwd")]
    Forward,
    #[serde(rename = "bwd")]
    Backward,
}

impl SearchDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SearchDirection::Forward => "Fwd",
            SearchDirection::Backward => "Bwd",
        }
    }
}

/// A* 松弛时的评分
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeuristicScores {
    pub g_score: i64,
    pub h_score: f64,
    pub f_score: f64,
}

/// 单个步骤事件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    Init {
        start_node: NodeId,
        #[serde(skip_serializing_if = "Option::is_none")]
        all_distances: Option<DistanceSnapshot>,
    },
    Visit {
        node: NodeId,
        cost: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        direction: Option<SearchDirection>,
    },
    CheckEdge {
        from: NodeId,
        to: NodeId,
        weight: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        direction: Option<SearchDirection>,
    },
    #[serde(rename = "update_dist")]
    UpdateDistance {
        node: NodeId,
        new_dist: i64,
        from: NodeId,
        #[serde(skip_serializing_if = "Option::is_none")]
        direction: Option<SearchDirection>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<HeuristicScores>,
        #[serde(skip_serializing_if = "Option::is_none")]
        all_distances: Option<DistanceSnapshot>,
    },
    Iteration {
        number: usize,
    },
    Meet {
        node: NodeId,
        cost: i64,
    },
    #[serde(rename = "negative_cycle")]
    NegativeCycleDetected {
        from: NodeId,
        to: NodeId,
    },
    Final {
        path: Vec<NodeId>,
        cost: Distance,
        nodes_visited: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        all_distances: Option<DistanceSnapshot>,
    },
}

impl StepEvent {
    /// 与序列化标签一致的事件类型名
    pub fn kind(&self) -> &'static str {
        match self {
            StepEvent::Init { .. } => "init",
            StepEvent::Visit { .. } => "visit",
            StepEvent::CheckEdge { .. } => "check_edge",
            StepEvent::UpdateDistance { .. } => "update_dist",
            StepEvent::Iteration { .. } => "iteration",
            StepEvent::Meet { .. } => "meet",
            StepEvent::NegativeCycleDetected { .. } => "negative_cycle",
            StepEvent::Final { .. } => "final",
        }
    }

    /// 面向动画展示的一行说明
    pub fn describe(&self) -> String {
        match self {
            StepEvent::Init { start_node, .. } => {
                format!("Initializing search from {start_node}.")
            }
            StepEvent::Visit {
                node,
                cost,
                direction: Some(direction),
            } => format!("{} search visiting {node} (cost {cost}).", direction.label()),
            StepEvent::Visit { node, cost, .. } => {
                format!("Finalized cost for node {node} is {cost}.")
            }
            StepEvent::CheckEdge { from, to, weight, .. } => {
                format!("Checking neighbor {to} of {from} (weight {weight}).")
            }
            StepEvent::UpdateDistance {
                node,
                scores: Some(scores),
                ..
            } => format!(
                "Updating {node}: g={}, h={:.1}, f={:.1}.",
                scores.g_score, scores.h_score, scores.f_score
            ),
            StepEvent::UpdateDistance {
                node,
                new_dist,
                from,
                ..
            } => format!("Updated distance for {node} to {new_dist} via {from}."),
            StepEvent::Iteration { number } => {
                format!("--- Relaxation Iteration {number} ---")
            }
            StepEvent::Meet { node, cost } => {
                format!("Searches met at {node}! Best cost now {cost}.")
            }
            StepEvent::NegativeCycleDetected { from, to } => {
                format!("Negative weight cycle detected: edge {from} -> {to} still relaxes.")
            }
            StepEvent::Final {
                path,
                cost,
                nodes_visited,
                ..
            } => {
                let route = path
                    .iter()
                    .map(NodeId::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                format!("Algorithm finished: cost {cost}, path [{route}], {nodes_visited} nodes visited.")
            }
        }
    }
}

/// 单次求解的完整轨迹（只追加）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<StepEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加事件，不做过滤或去重
    pub fn append(&mut self, event: StepEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&StepEvent> {
        self.events.last()
    }

    /// 以 `Final` 结尾时返回该事件
    pub fn final_event(&self) -> Option<&StepEvent> {
        self.last()
            .filter(|event| matches!(event, StepEvent::Final { .. }))
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self.last(), Some(StepEvent::NegativeCycleDetected { .. }))
    }
}

//! 启发式估计模块
//!
//! 欧几里得距离除以固定缩放系数；任一端缺少坐标时估计为 0

use crate::core::{ComputationFault, Coordinates, EngineResult, GraphModel, NodeId};

/// 坐标距离的缩放系数
pub const HEURISTIC_SCALE: f64 = 100.0;

/// 针对单一终点的启发式估计器
pub struct HeuristicEvaluator<'a> {
    graph: &'a GraphModel,
    target: Option<(f64, f64)>,
}

impl<'a> HeuristicEvaluator<'a> {
    pub fn new(graph: &'a GraphModel, target: &NodeId) -> EngineResult<Self> {
        let target = position(graph, target)?;
        Ok(Self { graph, target })
    }

    /// 估计 `node` 到终点的剩余代价
    pub fn estimate(&self, node: &NodeId) -> EngineResult<f64> {
        let source = position(self.graph, node)?;
        match (source, self.target) {
            (Some(from), Some(to)) => Ok(euclidean(from, to) / HEURISTIC_SCALE),
            _ => Ok(0.0),
        }
    }
}

pub fn euclidean(from: (f64, f64), to: (f64, f64)) -> f64 {
    (from.0 - to.0).hypot(from.1 - to.1)
}

fn position(graph: &GraphModel, node: &NodeId) -> EngineResult<Option<(f64, f64)>> {
    match graph.node(node.as_str()).map(|n| &n.coordinates) {
        Some(Coordinates::Point { x, y }) => Ok(Some((*x, *y))),
        Some(Coordinates::Malformed(detail)) => Err(ComputationFault::MalformedCoordinates {
            node: node.clone(),
            detail: detail.clone(),
        }),
        Some(Coordinates::Missing) | None => Ok(None),
    }
}

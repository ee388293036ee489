//! 路径重建模块

use std::collections::HashSet;

use log::warn;

use super::table::PredecessorTable;
use crate::core::NodeId;

/// 从 `from` 沿前驱回溯到 `root`，返回 `[from, ..., root]`
///
/// 链条中断或出现环时返回 `None`
pub fn trace_back(
    predecessors: &PredecessorTable,
    from: &NodeId,
    root: &NodeId,
) -> Option<Vec<NodeId>> {
    let mut chain = vec![from.clone()];
    let mut seen: HashSet<&NodeId> = HashSet::new();
    seen.insert(from);
    let mut current = from;

    while current != root {
        let previous = predecessors.get(current)?;
        if !seen.insert(previous) {
            warn!("predecessor cycle through {previous} while tracing back from {from}");
            return None;
        }
        chain.push(previous.clone());
        current = previous;
    }

    Some(chain)
}

/// 重建 `start -> target` 的路径；目标未与起点相连时返回空序列
pub fn reconstruct_path(
    predecessors: &PredecessorTable,
    start: &NodeId,
    target: &NodeId,
) -> Vec<NodeId> {
    match trace_back(predecessors, target, start) {
        Some(mut path) => {
            path.reverse();
            path
        }
        None => Vec::new(),
    }
}

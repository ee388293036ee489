//! 求解调度模块
//!
//! 算法选择器是封闭枚举，穷尽匹配到四个引擎

use std::fmt;
use std::str::FromStr;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::astar::AStar;
use super::bellman_ford::BellmanFord;
use super::bidirectional_dijkstra::BidirectionalDijkstra;
use super::dijkstra::Dijkstra;
use super::table::DistanceTable;
use super::trace::{DistanceSnapshot, Trace};
use crate::core::{GraphModel, NodeId, NodeRole, SolveError, SolveResult};

/// 可选的最短路径算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    AStar,
    BellmanFord,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BellmanFord,
        Algorithm::Bidirectional,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a_star",
            Algorithm::BellmanFord => "bellman_ford",
            Algorithm::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a_star" | "astar" => Ok(Algorithm::AStar),
            "bellman_ford" => Ok(Algorithm::BellmanFord),
            "bidirectional" => Ok(Algorithm::Bidirectional),
            other => Err(SolveError::invalid_request(format!(
                "invalid algorithm specified: {other}"
            ))),
        }
    }
}

/// 单源引擎（Dijkstra、A*）的终止方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// 遍历整个可达分量，最终事件报告所有节点距离
    #[default]
    Exhaustive,
    /// 终点定稿后立即停止
    StopAtTarget,
}

/// 求解选项
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOptions {
    pub search_mode: SearchMode,
    /// `UpdateDistance` 是否附带完整距离表快照
    pub distance_snapshots: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Exhaustive,
            distance_snapshots: true,
        }
    }
}

impl SolveOptions {
    pub(crate) fn snapshot(&self, table: &DistanceTable) -> Option<DistanceSnapshot> {
        self.distance_snapshots.then(|| table.snapshot())
    }

    pub(crate) fn stops_at(&self, node: &NodeId, end: &NodeId) -> bool {
        self.search_mode == SearchMode::StopAtTarget && node == end
    }
}

/// 求解器，不持有跨调用的可变状态
#[derive(Debug, Clone, Default)]
pub struct Solver {
    options: SolveOptions,
}

impl Solver {
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// 在 `graph` 上运行指定算法，返回完整轨迹
    pub fn solve(
        &self,
        graph: &GraphModel,
        start: &str,
        end: &str,
        algorithm: Algorithm,
    ) -> SolveResult<Trace> {
        let start = graph.require(start, NodeRole::Start)?;
        let end = graph.require(end, NodeRole::End)?;

        debug!(
            "running {} from {} to {} over {} nodes / {} edges",
            algorithm,
            start,
            end,
            graph.node_count(),
            graph.edges().len()
        );

        let outcome = match algorithm {
            Algorithm::Dijkstra => Dijkstra::solve(graph, start, end, &self.options),
            Algorithm::AStar => AStar::solve(graph, start, end, &self.options),
            Algorithm::BellmanFord => BellmanFord::solve(graph, start, end, &self.options),
            Algorithm::Bidirectional => {
                BidirectionalDijkstra::solve(graph, start, end, &self.options)
            }
        };

        match outcome {
            Ok(trace) => {
                debug!("{} finished with {} events", algorithm, trace.len());
                Ok(trace)
            }
            Err(source) => {
                error!("{} failed: {}", algorithm, source);
                Err(SolveError::ComputationError {
                    algorithm: algorithm.name(),
                    source,
                })
            }
        }
    }
}

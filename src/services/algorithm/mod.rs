//! 算法模块
//!
//! 四个最短路径引擎及其共享的叶子组件（邻接索引、距离表、优先队列、轨迹记录）

pub mod adjacency;
pub mod astar;
pub mod bellman_ford;
pub mod bidirectional_dijkstra;
pub mod dijkstra;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod solver;
pub mod table;
pub mod trace;

// 重新导出常用类型
pub use adjacency::{AdjacencyIndex, Neighbor};
pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use bidirectional_dijkstra::BidirectionalDijkstra;
pub use dijkstra::Dijkstra;
pub use frontier::Frontier;
pub use heuristic::{HeuristicEvaluator, HEURISTIC_SCALE};
pub use path::reconstruct_path;
pub use solver::{Algorithm, SearchMode, SolveOptions, Solver};
pub use table::{DistanceTable, PredecessorTable};
pub use trace::{DistanceSnapshot, HeuristicScores, SearchDirection, StepEvent, Trace};

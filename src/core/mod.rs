pub mod distance;
pub mod error;
pub mod graph;

pub use distance::{Distance, UNREACHED};
pub use error::{ComputationFault, EngineResult, NodeRole, SolveError, SolveResult};
pub use graph::{Coordinates, Edge, GraphData, GraphModel, Node, NodeId, RawEdge, RawNode};

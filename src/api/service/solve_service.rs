use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::core::{GraphData, GraphModel, NodeId, SolveError, SolveResult};
use crate::services::algorithm::{Algorithm, SolveOptions, Solver, Trace};

/// 求解请求
///
/// 所有字段都可缺省，缺失或为空时由 [`SolveService`] 统一拒绝
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[serde(default)]
    pub graph: Option<GraphData>,
    #[serde(default)]
    pub start_node: Option<Value>,
    #[serde(default)]
    pub end_node: Option<Value>,
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// 校验通过的请求
struct ValidatedRequest {
    graph: GraphModel,
    start: NodeId,
    end: NodeId,
    algorithm: Algorithm,
}

impl SolveRequest {
    fn validate(&self) -> SolveResult<ValidatedRequest> {
        let (Some(graph), Some(start), Some(end), Some(algorithm)) = (
            self.graph.as_ref(),
            self.start_node.as_ref().filter(|v| !is_blank(v)),
            self.end_node.as_ref().filter(|v| !is_blank(v)),
            self.algorithm.as_deref().filter(|a| !a.trim().is_empty()),
        ) else {
            return Err(SolveError::invalid_request("missing required parameters"));
        };

        let algorithm = algorithm.parse::<Algorithm>()?;
        let start = request_id(start, "startNode")?;
        let end = request_id(end, "endNode")?;
        let graph = GraphModel::from_data(graph)?;

        Ok(ValidatedRequest {
            graph,
            start,
            end,
            algorithm,
        })
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn request_id(value: &Value, field: &str) -> SolveResult<NodeId> {
    NodeId::from_json(value).ok_or_else(|| {
        SolveError::invalid_request(format!("{field} must be a string or number"))
    })
}

/// 求解服务
///
/// 每次调用独立构建图模型与引擎状态，可在多个请求间共享
#[derive(Debug, Clone, Default)]
pub struct SolveService {
    solver: Solver,
}

impl SolveService {
    pub fn new(options: SolveOptions) -> Self {
        Self {
            solver: Solver::new(options),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.solve_options())
    }

    pub fn options(&self) -> &SolveOptions {
        self.solver.options()
    }

    /// 校验请求并运行所选算法
    pub fn execute(&self, request: &SolveRequest) -> SolveResult<Trace> {
        let validated = request.validate()?;
        debug!(
            "solve request: {} from {} to {}",
            validated.algorithm, validated.start, validated.end
        );
        self.solver.solve(
            &validated.graph,
            validated.start.as_str(),
            validated.end.as_str(),
            validated.algorithm,
        )
    }
}

//! 统一错误处理 for PathTrace
//!
//! ## 设计
//!
//! 1. **边界错误**：`SolveError` 是唯一跨越求解引擎边界的错误类型
//!    - 请求形状错误、未知节点属于客户端输入错误
//!    - 引擎内部故障统一包装为 `ComputationError`，保留原始原因
//!
//! 2. **局部恢复**：权重解析失败等逐边缺陷在图模型内部恢复，不会出现在这里
//!
//! 3. **负权环不是错误**：它是 Bellman-Ford 轨迹的正常终止事件

use std::fmt;

use thiserror::Error;

use crate::core::graph::NodeId;

/// 求解边界错误
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown {role} node: {id}")]
    UnknownNodeKind { role: NodeRole, id: String },

    #[error("{algorithm} failed: {source}")]
    ComputationError {
        algorithm: &'static str,
        #[source]
        source: ComputationFault,
    },
}

impl SolveError {
    pub fn invalid_request<T: Into<String>>(msg: T) -> Self {
        SolveError::InvalidRequest(msg.into())
    }

    pub fn unknown_node<T: Into<String>>(role: NodeRole, id: T) -> Self {
        SolveError::UnknownNodeKind {
            role,
            id: id.into(),
        }
    }

    /// 是否为客户端输入错误（对应 HTTP 4xx）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidRequest(_) | SolveError::UnknownNodeKind { .. }
        )
    }
}

/// 引擎内部故障
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationFault {
    #[error("malformed coordinates on node {node}: {detail}")]
    MalformedCoordinates { node: NodeId, detail: String },

    #[error("distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: NodeId, to: NodeId },
}

/// 请求中节点所处的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    End,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Start => write!(f, "start"),
            NodeRole::End => write!(f, "end"),
        }
    }
}

/// 求解结果类型
pub type SolveResult<T> = Result<T, SolveError>;

/// 引擎内部结果类型
pub type EngineResult<T> = Result<T, ComputationFault>;

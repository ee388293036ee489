//! 请求服务层
//!
//! 校验请求形状并分派给求解器

pub mod solve_service;

pub use solve_service::{SolveRequest, SolveService};

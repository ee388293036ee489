//! HTTP 服务模块
//!
//! 提供基于 HTTP 协议的求解接口

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::HttpError;
pub use router::create_router;
pub use state::AppState;

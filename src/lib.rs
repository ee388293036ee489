//! PathTrace - shortest-path solvers that record every step they take
//!
//! Four engines (Dijkstra, A*, Bellman-Ford, bidirectional Dijkstra) share one
//! event model, so a caller can replay how each algorithm converged.

pub mod api;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

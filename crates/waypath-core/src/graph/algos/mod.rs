//! Path-finding algorithms
//!
//! - `dijkstra`: single-source shortest paths with node/edge exclusion
//! - `enumerate`: successive shortest loopless paths (Yen-style sessions)
//! - `all_paths`: bounded exhaustive simple-path enumeration and the
//!   weight-bounded path subgraph

pub mod all_paths;
pub mod dijkstra;
pub mod enumerate;

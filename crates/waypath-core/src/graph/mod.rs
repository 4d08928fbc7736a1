//! Graph storage and path-finding operations
//!
//! Provides the data structures and algorithms for navigating the link graph:
//! - Forward-star weighted digraph over dense integer ids
//! - Identifier interning for mapping external names onto those ids
//! - Dijkstra shortest paths and successive shortest loopless path enumeration

pub mod algos;
pub mod index;
pub mod types;
pub mod weighted;

pub use algos::all_paths::{all_paths, path_subgraph};
pub use algos::dijkstra::{build_path, solve, ShortestPaths};
pub use algos::enumerate::PathEnumerator;
pub use index::{IdentifierIndex, LabeledGraph};
pub use types::{NodeId, UndirectedEdge};
pub use weighted::{Edge, WeightedGraph};

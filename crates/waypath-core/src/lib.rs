//! Waypath Core Library
//!
//! Pathfinding engine over a weighted directed graph abstracted from an
//! arbitrary identifier space (note names, file names, plain strings).

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod query;

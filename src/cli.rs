//! CLI argument parsing for waypath
//!
//! Global flags pick the edge-list input, the optional config file, and the
//! output format; subcommands map one-to-one onto the core's queries.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Waypath - shortest paths and path enumeration over link graphs
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list file: one link per line, `from<TAB>to[<TAB>weight]`
    #[arg(long, global = true, env = "WAYPATH_EDGES")]
    pub edges: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat each input line as a one-way link (default: both directions)
    #[arg(long, global = true)]
    pub directed: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Weight-shortest path between two nodes
    Shortest {
        from: String,
        to: String,
    },

    /// Enumerate loopless paths, shortest first, one Dijkstra sweep per path
    Paths {
        from: String,
        to: String,

        /// Hop bound for every path after the first (default from config)
        #[arg(long)]
        max_hops: Option<usize>,

        /// Stop after this many paths instead of running to exhaustion
        #[arg(long)]
        count: Option<usize>,
    },

    /// List every simple path within a hop bound
    AllPaths {
        from: String,
        to: String,

        /// Hop bound (default from config)
        #[arg(long)]
        max_hops: Option<usize>,
    },

    /// Subgraph of all nodes on some path within a weight bound
    Subgraph {
        from: String,
        to: String,

        /// Maximum total path weight
        #[arg(long)]
        max_distance: f64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Line-oriented output for people
    Human,
    /// Structured output for scripts
    Json,
}

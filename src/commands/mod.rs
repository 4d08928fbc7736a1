//! Command dispatch
//!
//! Every subcommand shares the same setup: resolve config, load the edge
//! list, build the labeled graph, then hand off to the command module.

mod all_paths;
mod paths;
mod shortest;
mod subgraph;

use waypath_core::config::Config;
use waypath_core::error::{Error, Result};
use waypath_core::graph::LabeledGraph;

use crate::cli::{Cli, Commands};
use crate::load;

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let graph = build_graph(cli, &config)?;
    tracing::debug!(
        nodes = graph.graph().node_count(),
        edges = graph.graph().edge_count(),
        "graph built"
    );

    match &cli.command {
        Commands::Shortest { from, to } => shortest::run(cli, &graph, from, to),
        Commands::Paths {
            from,
            to,
            max_hops,
            count,
        } => paths::run(cli, &config, &graph, from, to, *max_hops, *count),
        Commands::AllPaths { from, to, max_hops } => {
            all_paths::run(cli, &config, &graph, from, to, *max_hops)
        }
        Commands::Subgraph {
            from,
            to,
            max_distance,
        } => subgraph::run(cli, &graph, from, to, *max_distance),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn build_graph(cli: &Cli, config: &Config) -> Result<LabeledGraph<String>> {
    let path = cli
        .edges
        .as_deref()
        .ok_or_else(|| Error::UsageError("--edges <FILE> is required".to_string()))?;
    let links = load::load_links(path, config.default_weight)?;
    let bidirectional = config.bidirectional && !cli.directed;
    LabeledGraph::from_links(links, bidirectional)
}

//! `waypath subgraph` - all nodes on some path within a weight bound

use serde::Serialize;

use waypath_core::error::Result;
use waypath_core::graph::{path_subgraph, LabeledGraph};

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct SubgraphEdge {
    from: String,
    to: String,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct SubgraphResult {
    found: bool,
    edges: Vec<SubgraphEdge>,
}

pub fn run(
    cli: &Cli,
    graph: &LabeledGraph<String>,
    from: &str,
    to: &str,
    max_distance: f64,
) -> Result<()> {
    let subgraph = path_subgraph(&from.to_string(), &to.to_string(), max_distance, graph)?;
    let result = match subgraph {
        None => SubgraphResult {
            found: false,
            edges: Vec::new(),
        },
        Some(sub) => SubgraphResult {
            found: true,
            edges: collect_edges(&sub),
        },
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_human(&result, cli.quiet),
    }
    Ok(())
}

fn collect_edges(sub: &LabeledGraph<String>) -> Vec<SubgraphEdge> {
    sub.graph()
        .edges()
        .filter_map(|edge| {
            let from = sub.name_of(edge.source)?.clone();
            let to = sub.name_of(edge.target)?.clone();
            Some(SubgraphEdge {
                from,
                to,
                weight: edge.weight,
            })
        })
        .collect()
}

fn print_human(result: &SubgraphResult, quiet: bool) {
    if !result.found {
        if !quiet {
            println!("no path within bound");
        }
        return;
    }
    for edge in &result.edges {
        println!("{}\t{}\t{}", edge.from, edge.to, edge.weight);
    }
}

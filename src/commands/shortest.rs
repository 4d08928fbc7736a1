//! `waypath shortest` - weight-shortest path between two nodes

use waypath_core::error::Result;
use waypath_core::graph::LabeledGraph;
use waypath_core::query::{self, ShortestPathResult};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, graph: &LabeledGraph<String>, from: &str, to: &str) -> Result<()> {
    let result = query::shortest_path(graph, &from.to_string(), &to.to_string())?;
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_human(&result),
    }
    Ok(())
}

fn print_human(result: &ShortestPathResult<String>) {
    match result {
        ShortestPathResult::SameNode { node } => println!("{node} (same node)"),
        ShortestPathResult::Unreachable => println!("unreachable"),
        ShortestPathResult::Found { distance, path } => {
            println!("{} (distance {distance})", path.join(" -> "));
        }
    }
}

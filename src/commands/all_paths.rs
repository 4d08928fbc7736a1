//! `waypath all-paths` - every simple path within a hop bound

use waypath_core::config::Config;
use waypath_core::error::{Error, Result};
use waypath_core::graph::{self, LabeledGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(
    cli: &Cli,
    config: &Config,
    graph: &LabeledGraph<String>,
    from: &str,
    to: &str,
    max_hops: Option<usize>,
) -> Result<()> {
    let source = graph
        .id_of(&from.to_string())
        .ok_or_else(|| Error::UnknownNode {
            name: from.to_string(),
        })?;
    let target = graph.id_of(&to.to_string()).ok_or_else(|| Error::UnknownNode {
        name: to.to_string(),
    })?;

    let bound = max_hops.unwrap_or(config.default_max_hops);
    let paths = graph::all_paths(source, target, bound, graph.graph());
    let named: Vec<Vec<String>> = paths
        .iter()
        .filter_map(|path| graph.resolve_path(path))
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&named)?),
        OutputFormat::Human => {
            if named.is_empty() && !cli.quiet {
                println!("no paths found");
            }
            for path in &named {
                println!("{}", path.join(" -> "));
            }
        }
    }
    Ok(())
}

//! `waypath paths` - successive shortest loopless paths

use waypath_core::config::Config;
use waypath_core::error::Result;
use waypath_core::graph::LabeledGraph;
use waypath_core::query::PathSession;

use crate::cli::{Cli, OutputFormat};

pub fn run(
    cli: &Cli,
    config: &Config,
    graph: &LabeledGraph<String>,
    from: &str,
    to: &str,
    max_hops: Option<usize>,
    count: Option<usize>,
) -> Result<()> {
    let bound = max_hops.unwrap_or(config.default_max_hops);
    let session = PathSession::new(graph, &from.to_string(), &to.to_string(), bound)?;
    let paths: Vec<Vec<String>> = match count {
        Some(limit) => session.take(limit).collect(),
        None => session.collect(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
        OutputFormat::Human => {
            if paths.is_empty() && !cli.quiet {
                println!("no paths found");
            }
            for path in &paths {
                println!("{}", path.join(" -> "));
            }
        }
    }
    Ok(())
}

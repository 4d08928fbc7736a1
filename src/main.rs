//! Waypath - shortest paths and path enumeration over link graphs
//!
//! A command-line front end for the waypath-core engine: feed it an edge
//! list flattened out of a link/reference index and query shortest paths,
//! successive loopless paths, or bounded path subgraphs.

mod cli;
mod commands;
mod load;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use waypath_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

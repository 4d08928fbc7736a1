//! Structured logging setup
//!
//! Logging goes to stderr so machine-readable output on stdout stays clean.
//! Level resolution: `RUST_LOG` / `WAYPATH_LOG` environment overrides win,
//! then an explicit `--log-level`, then `--verbose`, then warn.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Safe to call once per process; returns an error if a subscriber is
/// already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WAYPATH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("waypath={level},waypath_core={level}")
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

//! stderr diagnostics for the `autorev` binary

use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

/// Install the global subscriber.
///
/// A valid `RUST_LOG` wins; otherwise the level is `debug` with
/// `--verbose` and `warn` without.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = level_filter(verbose, rust_log.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()?;

    Ok(())
}

fn level_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(if verbose { "debug" } else { "warn" })
}

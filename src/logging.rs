//! tracing-subscriber setup for the binary
//!
//! Logs never go to stdout: `list` output is machine-readable, and the
//! terminal screen owns the tty. Non-interactive commands log to stderr; the
//! screen logs to a file when one is configured and otherwise not at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{CatalogError, Result};

/// Where log lines should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

/// Build an EnvFilter from a directive, honouring RUST_LOG when set
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive)
        .map_err(|e| CatalogError::Config(format!("Invalid log level '{}': {}", directive, e)))
}

/// Install the global subscriber.
///
/// A second call keeps the subscriber already installed; its `try_init`
/// error is discarded on purpose.
pub fn initialize_tracing(directive: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = build_filter(directive)?;

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
            tracing::info!(path = %path.display(), "File logging enabled");
        }
    }

    Ok(())
}

//! Diagnostic logging to stderr.
//!
//! Progress for the user is printed directly; this subscriber only carries
//! `tracing` events (spawned commands, failed probes). Filter with
//! `DEVENV_LOG`, default `warn`.

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

//! Tracing initialization for the postbox binary.
//!
//! RUST_LOG controls the filter (default: info); `--debug` raises the
//! default to debug without overriding an explicit RUST_LOG.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

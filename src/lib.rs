//! glassfish-probe library
//!
//! This crate provides the core functionality for probing a GlassFish
//! application server's monitoring REST endpoints and exposing single
//! metric values to a monitoring agent.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod probe;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging subsystem
///
/// Diagnostics go to stderr so the probe value on stdout stays clean for
/// the consuming agent.
///
/// # Arguments
/// * `level` - Log level string (trace, debug, info, warn, error)
///
/// # Errors
/// Returns an error if the logging system fails to initialize
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

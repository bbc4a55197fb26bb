//! CLI argument parsing for glassfish-probe
//!
//! This module provides the command-line interface using clap derive macros.
//!
//! # Options
//!
//! - `--config` / `-c`: Configuration file path (default: probe.yaml, env: GFPROBE_CONFIG)
//! - `--timeout-ms`: Request timeout in milliseconds (overrides config file, env: GFPROBE_TIMEOUT_MS)
//! - `--verify-tls`: Enable strict TLS verification (env: GFPROBE_VERIFY_TLS)
//! - `--log-level` / `-l`: Log level (trace/debug/info/warn/error, env: GFPROBE_LOG_LEVEL)
//! - `--output-format`: Result output format (text/json)
//! - `--list-keys`: List supported metric keys and exit
//!
//! # Precedence
//!
//! Configuration values are resolved in the following order (highest to
//! lowest priority):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ProbeConfig;

/// glassfish-probe - GlassFish monitoring REST probe
///
/// Fetches one value from a GlassFish monitoring endpoint and prints it,
/// for use as a Zabbix-style agent probe. The metric key selects the probe
/// shape; the parameters carry host, port, resource names, the extraction
/// pattern and credentials, in the same order the agent passes them.
#[derive(Parser, Debug)]
#[command(name = "glassfish-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "probe.yaml",
        env = "GFPROBE_CONFIG"
    )]
    pub config: PathBuf,

    /// Request timeout in milliseconds (overrides config file)
    #[arg(long, value_name = "MS", env = "GFPROBE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Verify the server's TLS certificate (overrides config file)
    #[arg(long, value_name = "BOOL", env = "GFPROBE_VERIFY_TLS")]
    pub verify_tls: Option<bool>,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "warn",
        env = "GFPROBE_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Result output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// List supported metric keys and exit
    #[arg(long)]
    pub list_keys: bool,

    /// Metric key (e.g. http.service, ping.connection.pool)
    #[arg(value_name = "KEY", required_unless_present = "list_keys")]
    pub key: Option<String>,

    /// Probe parameters, in key order
    #[arg(value_name = "PARAM", allow_hyphen_values = true)]
    pub params: Vec<String>,
}

impl Cli {
    /// Apply CLI/env overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut ProbeConfig) {
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(verify_tls) = self.verify_tls {
            config.verify_tls = verify_tls;
        }
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level - default
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Output format options for the probe result
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare value on stdout
    Text,
    /// JSON object with key and value (or error)
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

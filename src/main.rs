//! glassfish-probe - GlassFish monitoring REST probe
//!
//! This binary runs exactly one probe per invocation: it resolves the metric
//! key, fetches the monitoring endpoint, extracts and coerces the value, and
//! prints the result for the calling agent.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use glassfish_probe::cli::{Cli, OutputFormat};
use glassfish_probe::collector::GlassFishClient;
use glassfish_probe::config::ProbeConfig;
use glassfish_probe::probe::{self, MetricFamily};

fn main() -> Result<()> {
    let cli = Cli::parse();

    glassfish_probe::init_logging(&cli.log_level.to_string())?;

    if cli.list_keys {
        for key in MetricFamily::keys() {
            println!("{}", key);
        }
        return Ok(());
    }

    let mut config = ProbeConfig::load_or_default(&cli.config)?;
    cli.apply_to(&mut config);
    config.validate()?;

    debug!(
        timeout_ms = config.timeout_ms,
        verify_tls = config.verify_tls,
        "Probe configuration resolved"
    );

    // required_unless_present guarantees the key is set past --list-keys
    let key = cli.key.as_deref().expect("clap enforces the metric key");

    let client = GlassFishClient::new(&config)?;

    match probe::run(&client, key, &cli.params) {
        Ok(value) => {
            match cli.output_format {
                OutputFormat::Text => println!("{}", value),
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({ "key": key, "value": value })
                    );
                }
            }
            Ok(())
        }
        Err(err) => {
            // The message is the probe's error text: keep stdout clean in
            // text mode so the agent never mistakes it for a value.
            match cli.output_format {
                OutputFormat::Text => eprintln!("{}", err),
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({ "key": key, "error": err.to_string() })
                    );
                }
            }
            std::process::exit(1);
        }
    }
}

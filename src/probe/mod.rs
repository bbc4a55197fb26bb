//! Probe dispatch
//!
//! Maps an incoming metric key and parameter list to the matching family,
//! validates arity, and runs the fetch → extract → coerce pipeline.
//!
//! # Example
//!
//! ```ignore
//! use glassfish_probe::collector::GlassFishClient;
//! use glassfish_probe::config::ProbeConfig;
//! use glassfish_probe::probe;
//!
//! let client = GlassFishClient::new(&ProbeConfig::default())?;
//! let value = probe::run(&client, "http.service", &params)?;
//! ```

pub mod extract;
pub mod family;
pub mod value;

pub use extract::{extract, ExtractionOutcome};
pub use family::{Coercion, MetricFamily};
pub use value::MetricValue;

use tracing::debug;

use crate::collector::{GlassFishClient, RequestTarget};
use crate::error::{ProbeError, ProbeResult};

/// One validated probe invocation
///
/// Construction checks the key and the exact parameter count, so a
/// `MetricRequest` always carries a well-formed parameter list and a
/// [`RequestTarget`] can be derived from it without further checks.
#[derive(Debug, Clone)]
pub struct MetricRequest {
    family: MetricFamily,
    params: Vec<String>,
}

impl MetricRequest {
    /// Resolve the key and validate parameter arity.
    ///
    /// # Errors
    /// - `ProbeError::UnknownKey` for a key outside the family table
    /// - `ProbeError::Parameter` for a wrong parameter count; no network
    ///   activity has happened at this point
    pub fn parse(key: &str, params: &[String]) -> ProbeResult<Self> {
        let family =
            MetricFamily::from_key(key).ok_or_else(|| ProbeError::UnknownKey(key.to_string()))?;

        if params.len() != family.arity() {
            return Err(ProbeError::Parameter {
                key: family.key(),
                expected: family.arity(),
                actual: params.len(),
            });
        }

        Ok(Self {
            family,
            params: params.to_vec(),
        })
    }

    /// The resolved metric family
    pub fn family(&self) -> MetricFamily {
        self.family
    }

    /// Derive the request target: composed URL plus credentials.
    pub fn target(&self) -> RequestTarget {
        RequestTarget::new(
            self.family.monitor_url(&self.params),
            self.username(),
            self.password(),
        )
    }

    // Credentials are always the last two parameters.
    fn username(&self) -> &str {
        &self.params[self.params.len() - 2]
    }

    fn password(&self) -> &str {
        &self.params[self.params.len() - 1]
    }

    // The extraction pattern immediately precedes the credentials on
    // non-passthrough families.
    fn pattern(&self) -> &str {
        &self.params[self.params.len() - 3]
    }
}

/// Run one probe: resolve the key, fetch, extract, coerce.
///
/// Each call is independent: the shared client holds no per-invocation
/// state, and the response body is owned by this call alone.
pub fn run(client: &GlassFishClient, key: &str, params: &[String]) -> ProbeResult<MetricValue> {
    let request = MetricRequest::parse(key, params)?;
    run_request(client, &request)
}

/// Run an already-validated probe request.
pub fn run_request(client: &GlassFishClient, request: &MetricRequest) -> ProbeResult<MetricValue> {
    let target = request.target();
    let body = client.fetch(&target)?;
    debug!(key = %request.family(), body = %body, "Raw response body");

    if request.family().is_passthrough() {
        return Ok(MetricValue::Text(body));
    }

    let captured = match extract::extract(&body, request.pattern())? {
        ExtractionOutcome::Matched(capture) => capture,
        ExtractionOutcome::NoMatch => return Err(ProbeError::ResultEmpty),
    };
    debug!(key = %request.family(), captured = %captured, "Extracted value");

    let value = value::coerce(&captured, request.family().coercion())?;
    Ok(value)
}

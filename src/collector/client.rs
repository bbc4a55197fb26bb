//! Blocking HTTP client for GlassFish monitoring endpoints
//!
//! One client is built per process and shared by reference across probe
//! invocations; each fetch is an independent, stateless request.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;
use url::Url;

use super::RequestTarget;
use crate::config::ProbeConfig;
use crate::error::{ProbeResult, TransportError};

/// GlassFish monitoring HTTP client
pub struct GlassFishClient {
    client: Client,
    timeout_ms: u64,
    max_body_bytes: usize,
}

impl GlassFishClient {
    /// Build a client from the probe configuration.
    ///
    /// TLS certificate and hostname verification are disabled unless
    /// `verify_tls` is set: the usual target is an internal admin endpoint
    /// with a self-signed certificate. This is a deliberate trust reduction;
    /// enable `verify_tls` where the endpoint carries a real certificate.
    ///
    /// # Errors
    /// Returns `TransportError::Init` if the underlying client cannot be
    /// constructed.
    pub fn new(config: &ProbeConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(TransportError::Init)?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Execute a single GET and buffer the whole response body.
    ///
    /// The HTTP status code is deliberately not inspected: a 404 or 500 with
    /// a JSON error body is a successful fetch at this layer, and the
    /// extractor or passthrough consumer decides what to make of it.
    ///
    /// # Errors
    /// - `TransportError::InvalidUrl` if the composed URL does not parse
    /// - `TransportError::Timeout` if the request exceeds the configured limit
    /// - `TransportError::Request` for network/TLS failures
    /// - `TransportError::Body` / `BodyTooLarge` while reading the response
    pub fn fetch(&self, target: &RequestTarget) -> ProbeResult<String> {
        let url = Url::parse(&target.url).map_err(|e| TransportError::InvalidUrl {
            url: target.url.clone(),
            source: e,
        })?;

        debug!(url = %url, "Sending monitoring request");

        let mut request = self.client.get(url);
        if !target.is_anonymous() {
            request = request.basic_auth(&target.username, Some(&target.password));
        }

        let response = request.send().map_err(|e| self.classify(e))?;
        debug!(status = %response.status(), "Response received");

        // Read one byte past the cap so an oversized body is detectable
        // without buffering all of it.
        let mut body = String::new();
        let mut limited = response.take(self.max_body_bytes as u64 + 1);
        limited
            .read_to_string(&mut body)
            .map_err(TransportError::Body)?;

        if body.len() > self.max_body_bytes {
            return Err(TransportError::BodyTooLarge {
                limit: self.max_body_bytes,
            }
            .into());
        }

        Ok(body)
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout_ms)
        } else {
            TransportError::Request(err)
        }
    }
}

//! GlassFish monitoring REST collector
//!
//! Executes a single authenticated GET against a GlassFish monitoring
//! endpoint and buffers the response body.
//!
//! # Example
//!
//! ```ignore
//! use glassfish_probe::collector::{GlassFishClient, RequestTarget};
//! use glassfish_probe::config::ProbeConfig;
//!
//! let client = GlassFishClient::new(&ProbeConfig::default())?;
//! let target = RequestTarget::new("http://gf:4848/monitoring/...", "admin", "secret");
//! let body = client.fetch(&target)?;
//! ```

mod client;

pub use client::GlassFishClient;

/// A fully composed request: absolute URL plus basic-auth credentials.
///
/// Derived deterministically from one metric request; lives for the duration
/// of a single fetch.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    /// Absolute monitoring URL
    pub url: String,
    /// Basic-auth username; empty together with password means no auth
    pub username: String,
    /// Basic-auth password
    pub password: String,
}

impl RequestTarget {
    /// Create a new request target
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// True when no Authorization header should be sent
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

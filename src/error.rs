//! Error types for glassfish-probe
//!
//! This module defines the error types used throughout the application.

use thiserror::Error;

/// Transport-layer errors
///
/// Client construction and request execution are distinct failure kinds:
/// an `Init` error means the probe never reached the network, while the
/// remaining variants describe what went wrong on the wire.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP client construction failed
    #[error("Error initializing transport: {0}")]
    Init(#[source] reqwest::Error),

    /// Composed request URL does not parse
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Request failed at the network/TLS layer
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Reading the response body failed
    #[error("Failed to read HTTP response: {0}")]
    Body(#[source] std::io::Error),

    /// Response body exceeded the configured cap
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extraction pattern failed to compile
    #[error("Invalid extraction pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Coercion errors
#[derive(Error, Debug)]
pub enum CoerceError {
    /// Captured string has no leading numeric to parse
    #[error("Extracted value '{capture}' is not numeric")]
    NotNumeric { capture: String },
}

/// Top-level probe error
///
/// One invocation produces at most one of these; all are terminal for that
/// invocation — the host agent decides whether and when to re-poll. The
/// `Display` text is what the agent reports as the probe's error message.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Wrong parameter count for the invoked key; detected before any
    /// network activity
    #[error("Invalid number of parameters: {key} expects {expected}, got {actual}")]
    Parameter {
        key: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key does not name a supported metric family
    #[error("Unknown metric key '{0}'")]
    UnknownKey(String),

    /// Transport initialization or request failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Extraction pattern problem
    #[error(transparent)]
    Pattern(#[from] ExtractError),

    /// Extraction produced no match
    #[error("Result is empty")]
    ResultEmpty,

    /// Extracted value could not be coerced to the metric's type
    #[error(transparent)]
    Coerce(#[from] CoerceError),
}

impl ProbeError {
    /// True if the failure happened before any network activity
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            ProbeError::Parameter { .. }
                | ProbeError::UnknownKey(_)
                | ProbeError::Transport(TransportError::Init(_))
                | ProbeError::Transport(TransportError::InvalidUrl { .. })
        )
    }
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_message() {
        let err = ProbeError::Parameter {
            key: "resource",
            expected: 7,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid number of parameters"));
        assert!(msg.contains("resource"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_result_empty_message() {
        assert_eq!(ProbeError::ResultEmpty.to_string(), "Result is empty");
    }

    #[test]
    fn test_failure_classes_distinguishable() {
        // The four failure classes must stay tellable apart in logs.
        let arity = ProbeError::Parameter {
            key: "application",
            expected: 7,
            actual: 0,
        }
        .to_string();
        let timeout = ProbeError::from(TransportError::Timeout(10_000)).to_string();
        let empty = ProbeError::ResultEmpty.to_string();
        let coerce = ProbeError::from(CoerceError::NotNumeric {
            capture: "n/a".to_string(),
        })
        .to_string();

        let all = [&arity, &timeout, &empty, &coerce];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_pre_network_classification() {
        let err = ProbeError::Parameter {
            key: "resource",
            expected: 7,
            actual: 1,
        };
        assert!(err.is_pre_network());
        assert!(ProbeError::UnknownKey("nope".to_string()).is_pre_network());
        assert!(!ProbeError::ResultEmpty.is_pre_network());
        assert!(!ProbeError::from(TransportError::Timeout(100)).is_pre_network());
    }
}

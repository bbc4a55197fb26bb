//! Metric family definitions
//!
//! Each supported probe key maps to one [`MetricFamily`] variant. The family
//! fixes the parameter arity, the monitoring URL template, whether the
//! response body is regex-extracted or passed through verbatim, and how the
//! extracted capture is coerced into the advertised result type.

use std::fmt;

/// GlassFish REST path for the connection-pool ping command
const PING_CONNECTION_POOL_PATH: &str = "management/domain/resources/ping-connection-pool";
/// GlassFish REST path prefix for resource monitoring
const RESOURCE_PATH: &str = "monitoring/domain/server/resources";
/// GlassFish REST path for http-service request statistics
const HTTP_SERVICE_PATH: &str = "monitoring/domain/server/http-service/server/request";
/// GlassFish REST path prefix for per-application monitoring
const APPLICATION_PATH: &str = "monitoring/domain/server/applications";

/// The seven supported probe shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFamily {
    /// Connection-pool ping, result coerced to 0/1
    PingConnectionPool,
    /// Resource statistic, unsigned counter
    Resource,
    /// Resource statistic, raw JSON passthrough
    ResourceJson,
    /// http-service request statistic, unsigned counter
    HttpService,
    /// http-service request statistic, raw JSON passthrough
    HttpServiceJson,
    /// Per-application statistic, unsigned counter clamped at zero
    Application,
    /// Per-application statistic, raw JSON passthrough
    ApplicationJson,
}

/// How an extracted capture becomes the final metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Leading-numeric parse into an unsigned counter
    Counter,
    /// Same parse, negative results clamp to zero
    CounterClamped,
    /// Literal `SUCCESS` token comparison, 1 or 0
    SuccessToken,
    /// No extraction, no coercion: raw body out
    Passthrough,
}

/// Static key table: external key string, family, parameter arity.
///
/// Dispatch resolves against this table instead of matching free-form key
/// strings at each call site; arity lives next to the key it belongs to.
static FAMILIES: [(&str, MetricFamily, usize); 7] = [
    ("ping.connection.pool", MetricFamily::PingConnectionPool, 6),
    ("resource", MetricFamily::Resource, 7),
    ("resource.json", MetricFamily::ResourceJson, 6),
    ("http.service", MetricFamily::HttpService, 6),
    ("http.service.json", MetricFamily::HttpServiceJson, 5),
    ("application", MetricFamily::Application, 7),
    ("application.json", MetricFamily::ApplicationJson, 6),
];

impl MetricFamily {
    /// Resolve an external metric key to its family
    pub fn from_key(key: &str) -> Option<Self> {
        FAMILIES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, family, _)| *family)
    }

    /// The external key string for this family
    pub fn key(&self) -> &'static str {
        FAMILIES
            .iter()
            .find(|(_, family, _)| family == self)
            .map(|(k, _, _)| *k)
            .expect("every family is in the key table")
    }

    /// Exact number of parameters this family's key takes
    pub fn arity(&self) -> usize {
        FAMILIES
            .iter()
            .find(|(_, family, _)| family == self)
            .map(|(_, _, n)| *n)
            .expect("every family is in the key table")
    }

    /// All supported external keys, in table order
    pub fn keys() -> impl Iterator<Item = &'static str> {
        FAMILIES.iter().map(|(k, _, _)| *k)
    }

    /// True for `.json` variants that skip extraction entirely
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            MetricFamily::ResourceJson
                | MetricFamily::HttpServiceJson
                | MetricFamily::ApplicationJson
        )
    }

    /// The coercion rule applied to this family's extracted capture
    pub fn coercion(&self) -> Coercion {
        match self {
            MetricFamily::PingConnectionPool => Coercion::SuccessToken,
            MetricFamily::Resource | MetricFamily::HttpService => Coercion::Counter,
            MetricFamily::Application => Coercion::CounterClamped,
            MetricFamily::ResourceJson
            | MetricFamily::HttpServiceJson
            | MetricFamily::ApplicationJson => Coercion::Passthrough,
        }
    }

    /// Compose the absolute monitoring URL for this family.
    ///
    /// `params` is the full, arity-validated parameter list; the first two
    /// entries are host (scheme included) and port. Parameters are not
    /// URL-escaped: callers may pass values that are already encoded.
    pub fn monitor_url(&self, params: &[String]) -> String {
        let host = &params[0];
        let port = &params[1];
        match self {
            MetricFamily::PingConnectionPool => format!(
                "{host}:{port}/{PING_CONNECTION_POOL_PATH}/?appname=&id={}&modulename=&targetName=&__remove_empty_entries__=true",
                params[2]
            ),
            MetricFamily::Resource | MetricFamily::ResourceJson => format!(
                "{host}:{port}/{RESOURCE_PATH}/{}/{}",
                params[2], params[3]
            ),
            MetricFamily::HttpService | MetricFamily::HttpServiceJson => {
                format!("{host}:{port}/{HTTP_SERVICE_PATH}/{}", params[2])
            }
            MetricFamily::Application | MetricFamily::ApplicationJson => format!(
                "{host}:{port}/{APPLICATION_PATH}/{}/server/{}",
                params[2], params[3]
            ),
        }
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

//! Per-request proxy configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Proxy settings attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProxyConfig {
    /// URL match pattern selecting the requests this proxy applies to.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
    /// Proxy host name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Proxy port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Tunnel through the proxy with `CONNECT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel: Option<bool>,
    /// Whether this proxy entry is switched off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProxyConfig {
    /// Create a proxy entry for a host and port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
            ..Default::default()
        }
    }

    /// Set the match pattern.
    #[must_use]
    pub fn with_match(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }
}

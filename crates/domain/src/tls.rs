//! Client certificates attached to requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::opaque::or_empty;

/// A client certificate and the hosts it is presented to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Certificate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL match patterns.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<String>,
    /// Private key location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<CertificateSource>,
    /// Certificate location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<CertificateSource>,
    /// Passphrase for the private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where a key or certificate file lives.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CertificateSource {
    /// File path as written by the producer.
    #[serde(rename = "src", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CertificateSource {
    /// Create a source pointing at a path.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            extra: Map::new(),
        }
    }
}

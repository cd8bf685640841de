//! Typed request record.
//!
//! Items store their request opaquely because Postman accepts a bare URL string
//! there. [`Request`] is the typed form used to build new items and to inspect
//! stored requests that are objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::body::RequestBody;
use super::header::RequestHeader;
use crate::auth::Auth;
use crate::error::{DomainError, DomainResult};
use crate::opaque::{OpaqueValue, ValueKind, present};
use crate::proxy::ProxyConfig;
use crate::tls::Certificate;

/// A request definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// URL string or structured URL object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub url: Option<OpaqueValue>,
    /// Request-level auth override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    /// Proxy settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    /// Client certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    /// HTTP method, any case, custom verbs allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// String or description object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Header list, or a raw header block string.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub header: Option<OpaqueValue>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Request {
    /// Creates a request with a method and a plain URL string.
    ///
    /// # Errors
    ///
    /// Propagates URL encoding failures.
    pub fn new(method: impl Into<String>, url: &str) -> DomainResult<Self> {
        Ok(Self {
            method: Some(method.into()),
            url: Some(OpaqueValue::from_serialize(url)?),
            ..Self::default()
        })
    }

    /// Replaces the header list.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures.
    pub fn with_headers(mut self, headers: &[RequestHeader]) -> DomainResult<Self> {
        self.header = Some(OpaqueValue::from_serialize(headers)?);
        Ok(self)
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// The raw URL text, from either the string form or the object's `raw` key.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] when there is no URL or the object has no
    /// `raw`; [`DomainError::TypeMismatch`] for other shapes.
    pub fn raw_url(&self) -> DomainResult<String> {
        let url = self.url.as_ref().ok_or_else(|| DomainError::NotFound {
            field: "request url",
            name: String::new(),
        })?;
        match url.kind() {
            ValueKind::Object => url
                .as_object()?
                .get("raw")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| DomainError::NotFound {
                    field: "url field",
                    name: "raw".to_string(),
                }),
            _ => url.as_str(),
        }
    }

    /// Decodes the header list. An absent header field is an empty list.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] when headers are stored as a string block.
    pub fn headers_typed(&self) -> DomainResult<Vec<RequestHeader>> {
        self.header
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), OpaqueValue::decode)
    }
}

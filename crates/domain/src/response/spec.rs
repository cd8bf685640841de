//! Response sample record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cookie::Cookie;
use crate::error::DomainResult;
use crate::opaque::{OpaqueValue, or_empty, present};
use crate::request::Request;

/// A captured response example.
///
/// `originalRequest`, `responseTime` and `header` keep whatever shape the
/// producer wrote: the request may be a URL string or an object, timing is
/// usually a number but not always, and headers may be a list or a text block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Response identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Example name shown in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The request that produced this response.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub original_request: Option<OpaqueValue>,
    /// Round-trip time.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub response_time: Option<OpaqueValue>,
    /// Response headers.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub header: Option<OpaqueValue>,
    /// Cookies set by the response.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub cookie: Vec<Cookie>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Status text, e.g. `OK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Keys this model does not know (`_postman_previewlanguage`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Response {
    /// Decodes `originalRequest` when it is stored as an object.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`](crate::DomainError::TypeMismatch) when it
    /// is a bare URL string or another shape.
    pub fn original_request_typed(&self) -> DomainResult<Option<Request>> {
        self.original_request
            .as_ref()
            .map(OpaqueValue::decode)
            .transpose()
    }
}

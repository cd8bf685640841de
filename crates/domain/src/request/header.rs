//! Request headers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::opaque::{OpaqueValue, present};

/// One entry of a request's header list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestHeader {
    /// Header name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the header is left out when sending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// String or description object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestHeader {
    /// Creates an enabled header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Absent `disabled` means enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled.unwrap_or(false)
    }
}

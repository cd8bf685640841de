//! Collection header metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::opaque::{OpaqueValue, ValueKind, present};

/// The `info` block: identity and format version of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Information {
    /// Postman-assigned collection identifier.
    #[serde(rename = "_postman_id", default, skip_serializing_if = "Option::is_none")]
    pub postman_id: Option<String>,
    /// Collection name. The only required key of the block.
    pub name: String,
    /// String or [`Description`] object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Version string, number or [`Version`] object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub version: Option<OpaqueValue>,
    /// Schema URI the document claims to follow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Keys this model does not know (`_exporter_id`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Information {
    /// Schema URI of format v2.1.0.
    pub const SCHEMA_V2_1_0: &'static str =
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

    /// Creates a header claiming schema v2.1.0.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            postman_id: None,
            name: name.into(),
            description: None,
            version: None,
            schema: Some(Self::SCHEMA_V2_1_0.to_string()),
            extra: Map::new(),
        }
    }

    /// Description text, whichever form it is stored in.
    ///
    /// # Errors
    ///
    /// See [`Description::text_of`].
    pub fn description_text(&self) -> DomainResult<Option<String>> {
        self.description.as_ref().map(Description::text_of).transpose()
    }

    /// Decodes the version when it is stored as an object.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] for string and number versions.
    pub fn version_typed(&self) -> DomainResult<Option<Version>> {
        self.version.as_ref().map(OpaqueValue::decode).transpose()
    }
}

/// Rich description object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// MIME type of `content`, e.g. `text/markdown`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Description version, any shape.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub version: Option<OpaqueValue>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Description {
    /// Text of a description field stored as a string or as an object.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] for an object without `content`;
    /// [`DomainError::TypeMismatch`] for any other shape.
    pub fn text_of(value: &OpaqueValue) -> DomainResult<String> {
        match value.kind() {
            ValueKind::String => value.as_str(),
            ValueKind::Object => value
                .decode::<Self>()?
                .content
                .ok_or_else(|| DomainError::NotFound {
                    field: "description field",
                    name: "content".to_string(),
                }),
            found => Err(DomainError::TypeMismatch {
                expected: "string or description object",
                found,
            }),
        }
    }
}

/// Structured semantic version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Major component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u64>,
    /// Minor component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u64>,
    /// Patch component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<u64>,
    /// Pre-release identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Free-form build metadata.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub meta: Option<OpaqueValue>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

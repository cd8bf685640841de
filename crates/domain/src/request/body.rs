//! Request body tagged by `mode`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::opaque::{OpaqueValue, or_empty, present};
use crate::tag::RequestBodyMode;

/// A `urlencoded` body parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEncodedParameter {
    /// Parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Parameter value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the parameter is left out when sending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// String or description object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UrlEncodedParameter {
    /// Creates an enabled parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// A `formdata` body parameter: text or file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormParameter {
    /// Parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// File path, or list of paths for multi-file fields.
    #[serde(rename = "src", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub source: Option<OpaqueValue>,
    /// Whether the parameter is left out when sending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// `text` or `file`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Explicit part content type.
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// String or description object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormParameter {
    /// Creates a text part.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            param_type: Some("text".to_string()),
            ..Self::default()
        }
    }
}

/// A binary file body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Path of the file to upload.
    #[serde(rename = "src", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Inline file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body. `mode` selects which payload slot is meaningful, but every
/// slot present in the source is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Active payload kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RequestBodyMode>,
    /// Text payload for `raw`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Parameters for `urlencoded`.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub urlencoded: Vec<UrlEncodedParameter>,
    /// Parts for `formdata`.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub formdata: Vec<FormParameter>,
    /// File for `file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    /// Keys this model does not know (`graphql`, `options`, `disabled`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Borrowed view of the payload selected by [`RequestBody::mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyPayload<'a> {
    /// `raw`
    Raw(&'a str),
    /// `urlencoded`
    UrlEncoded(&'a [UrlEncodedParameter]),
    /// `formdata`
    FormData(&'a [FormParameter]),
    /// `file`
    File(&'a File),
}

impl RequestBody {
    /// A `raw` body.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            mode: Some(RequestBodyMode::RAW),
            raw: Some(text.into()),
            ..Self::default()
        }
    }

    /// A `urlencoded` body.
    #[must_use]
    pub fn urlencoded(parameters: Vec<UrlEncodedParameter>) -> Self {
        Self {
            mode: Some(RequestBodyMode::URL_ENCODED),
            urlencoded: parameters,
            ..Self::default()
        }
    }

    /// A `formdata` body.
    #[must_use]
    pub fn formdata(parameters: Vec<FormParameter>) -> Self {
        Self {
            mode: Some(RequestBodyMode::FORM_DATA),
            formdata: parameters,
            ..Self::default()
        }
    }

    /// A `file` body.
    #[must_use]
    pub fn file(file: File) -> Self {
        Self {
            mode: Some(RequestBodyMode::FILE),
            file: Some(file),
            ..Self::default()
        }
    }

    /// The payload selected by `mode`.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownVariant`] for an unrecognized mode;
    /// [`DomainError::NotFound`] when `mode` is missing or its slot is empty.
    pub fn active_payload(&self) -> DomainResult<BodyPayload<'_>> {
        let Some(mode) = &self.mode else {
            return Err(DomainError::NotFound {
                field: "body mode",
                name: String::new(),
            });
        };
        let payload = match mode.as_str() {
            "raw" => self.raw.as_deref().map(BodyPayload::Raw),
            "urlencoded" => {
                (!self.urlencoded.is_empty()).then_some(BodyPayload::UrlEncoded(&self.urlencoded))
            }
            "formdata" => {
                (!self.formdata.is_empty()).then_some(BodyPayload::FormData(&self.formdata))
            }
            "file" => self.file.as_ref().map(BodyPayload::File),
            other => {
                return Err(DomainError::UnknownVariant {
                    field: "body mode",
                    value: other.to_string(),
                });
            }
        };
        payload.ok_or_else(|| DomainError::NotFound {
            field: "body payload",
            name: mode.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_payload() {
        let body: RequestBody =
            serde_json::from_str(r#"{"mode":"raw","raw":"{\"name\": \"John\"}"}"#).unwrap();
        assert_eq!(body.active_payload().unwrap(), BodyPayload::Raw("{\"name\": \"John\"}"));
    }

    #[test]
    fn test_empty_raw_is_a_value() {
        let json = r#"{"mode":"raw","raw":""}"#;
        let body: RequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.active_payload().unwrap(), BodyPayload::Raw(""));
        assert_eq!(serde_json::to_string(&body).unwrap(), json);
    }

    #[test]
    fn test_mismatched_slots_are_kept() {
        let json = r#"{"mode":"urlencoded","raw":"stale","urlencoded":[{"key":"a","value":"1"}]}"#;
        let body: RequestBody = serde_json::from_str(json).unwrap();
        match body.active_payload().unwrap() {
            BodyPayload::UrlEncoded(params) => assert_eq!(params.len(), 1),
            other => panic!("unexpected payload: {other:?}"),
        }
        assert_eq!(serde_json::to_string(&body).unwrap(), json);
    }

    #[test]
    fn test_unknown_mode() {
        let json = r#"{"mode":"graphql","graphql":{"query":"{ me { id } }"}}"#;
        let body: RequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(
            body.active_payload().unwrap_err(),
            DomainError::UnknownVariant {
                field: "body mode",
                value: "graphql".to_string()
            }
        );
        assert_eq!(serde_json::to_string(&body).unwrap(), json);
    }

    #[test]
    fn test_missing_payload() {
        let body: RequestBody = serde_json::from_str(r#"{"mode":"file"}"#).unwrap();
        assert!(matches!(
            body.active_payload(),
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            RequestBody::default().active_payload(),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_formdata_file_list_src() {
        let json = r#"{"key":"docs","src":["/a.pdf","/b.pdf"],"type":"file","contentType":"application/pdf"}"#;
        let param: FormParameter = serde_json::from_str(json).unwrap();
        assert_eq!(param.source.as_ref().unwrap().as_array().unwrap().len(), 2);
        assert_eq!(serde_json::to_string(&param).unwrap(), json);
    }

    #[test]
    fn test_builders() {
        let body = RequestBody::formdata(vec![FormParameter::text("name", "x")]);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"mode":"formdata","formdata":[{"key":"name","value":"x","type":"text"}]}"#
        );
        let body = RequestBody::urlencoded(vec![UrlEncodedParameter::new("q", "1")]);
        assert!(matches!(
            body.active_payload(),
            Ok(BodyPayload::UrlEncoded(_))
        ));
    }
}

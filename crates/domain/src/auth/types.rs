//! Auth tagged union.
//!
//! An [`Auth`] names its scheme in `type` and carries one attribute list per
//! scheme. Only the list matching `type` is meaningful, yet every list present
//! in the source is kept and written back: producers sometimes leave stale
//! lists behind when the scheme is switched, and dropping them would lose data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::opaque::{OpaqueValue, or_empty, present};
use crate::tag::AuthType;

/// One `key`/`value` setting of an auth scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthAttribute {
    /// Setting name, e.g. `username` or `token`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Setting value; strings are common but any JSON appears in the wild.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<OpaqueValue>,
    /// Value type hint (`string`, `boolean`, `any`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthAttribute {
    /// Creates a typed `string` attribute.
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError::InvalidJson`] from encoding the value.
    pub fn string(key: impl Into<String>, value: &str) -> DomainResult<Self> {
        Ok(Self {
            key: Some(key.into()),
            value: Some(OpaqueValue::from_serialize(value)?),
            attribute_type: Some("string".to_string()),
            extra: Map::new(),
        })
    }

    /// The value as a string.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] when no value is present,
    /// [`DomainError::TypeMismatch`] when it is not a string.
    pub fn value_str(&self) -> DomainResult<String> {
        self.value
            .as_ref()
            .ok_or_else(|| DomainError::NotFound {
                field: "auth attribute value",
                name: self.key.clone().unwrap_or_default(),
            })?
            .as_str()
    }
}

/// Authentication settings, tagged by `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    /// Active scheme. Unrecognized schemes are kept as-is; a block without
    /// `type` still parses and has no active payload.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    /// Marker payload of the `noauth` scheme, kept verbatim.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub noauth: Option<OpaqueValue>,
    /// AWS Signature v4 settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub awsv4: Vec<AuthAttribute>,
    /// HTTP Basic settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub basic: Vec<AuthAttribute>,
    /// Bearer token settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub bearer: Vec<AuthAttribute>,
    /// HTTP Digest settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub digest: Vec<AuthAttribute>,
    /// Hawk settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub hawk: Vec<AuthAttribute>,
    /// NTLM settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub ntlm: Vec<AuthAttribute>,
    /// `OAuth` 1.0 settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub oauth1: Vec<AuthAttribute>,
    /// `OAuth` 2.0 settings.
    #[serde(default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub oauth2: Vec<AuthAttribute>,
    /// Keys this model does not know, including lists for schemes it has no
    /// slot for (`apikey`, `edgegrid`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Auth {
    /// Creates an auth block with no attributes.
    #[must_use]
    pub fn new(auth_type: AuthType) -> Self {
        Self {
            auth_type: Some(auth_type),
            ..Self::default()
        }
    }

    /// Creates an auth block with `attributes` stored in the slot for
    /// `auth_type`.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownVariant`] if the scheme has no attribute slot.
    pub fn with_attributes(
        auth_type: AuthType,
        attributes: Vec<AuthAttribute>,
    ) -> DomainResult<Self> {
        let name = auth_type.to_string();
        let mut auth = Self::new(auth_type);
        *auth.slot_mut(&name).ok_or(DomainError::UnknownVariant {
            field: "auth type",
            value: name,
        })? = attributes;
        Ok(auth)
    }

    /// HTTP Basic credentials.
    ///
    /// # Errors
    ///
    /// Propagates attribute encoding failures.
    pub fn basic(username: &str, password: &str) -> DomainResult<Self> {
        Self::with_attributes(
            AuthType::BASIC,
            vec![
                AuthAttribute::string("username", username)?,
                AuthAttribute::string("password", password)?,
            ],
        )
    }

    /// Bearer token.
    ///
    /// # Errors
    ///
    /// Propagates attribute encoding failures.
    pub fn bearer(token: &str) -> DomainResult<Self> {
        Self::with_attributes(AuthType::BEARER, vec![AuthAttribute::string("token", token)?])
    }

    /// The attribute list stored for `auth_type`, whether or not it is active.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownVariant`] if the scheme has no attribute slot.
    pub fn attributes(&self, auth_type: &AuthType) -> DomainResult<&[AuthAttribute]> {
        self.slot(auth_type.as_str())
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::UnknownVariant {
                field: "auth type",
                value: auth_type.to_string(),
            })
    }

    /// The attribute list selected by `type`.
    ///
    /// `noauth` has no attributes by definition and yields an empty slice.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownVariant`] for an unrecognized `type`;
    /// [`DomainError::NotFound`] when `type` or the matching list is absent.
    pub fn active_payload(&self) -> DomainResult<&[AuthAttribute]> {
        let auth_type = self.auth_type.as_ref().ok_or_else(|| DomainError::NotFound {
            field: "auth type",
            name: "type".to_string(),
        })?;
        if *auth_type == AuthType::NOAUTH {
            return Ok(&[]);
        }
        let attributes = self.attributes(auth_type)?;
        if attributes.is_empty() {
            return Err(DomainError::NotFound {
                field: "auth payload",
                name: auth_type.to_string(),
            });
        }
        Ok(attributes)
    }

    /// Looks up an attribute of the active scheme by key.
    ///
    /// # Errors
    ///
    /// Everything [`Self::active_payload`] returns, plus
    /// [`DomainError::NotFound`] when no attribute carries `key`.
    pub fn attribute(&self, key: &str) -> DomainResult<&AuthAttribute> {
        self.active_payload()?
            .iter()
            .find(|attribute| attribute.key.as_deref() == Some(key))
            .ok_or_else(|| DomainError::NotFound {
                field: "auth attribute",
                name: key.to_string(),
            })
    }

    fn slot(&self, auth_type: &str) -> Option<&Vec<AuthAttribute>> {
        Some(match auth_type {
            "awsv4" => &self.awsv4,
            "basic" => &self.basic,
            "bearer" => &self.bearer,
            "digest" => &self.digest,
            "hawk" => &self.hawk,
            "ntlm" => &self.ntlm,
            "oauth1" => &self.oauth1,
            "oauth2" => &self.oauth2,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, auth_type: &str) -> Option<&mut Vec<AuthAttribute>> {
        Some(match auth_type {
            "awsv4" => &mut self.awsv4,
            "basic" => &mut self.basic,
            "bearer" => &mut self.bearer,
            "digest" => &mut self.digest,
            "hawk" => &mut self.hawk,
            "ntlm" => &mut self.ntlm,
            "oauth1" => &mut self.oauth1,
            "oauth2" => &mut self.oauth2,
            _ => return None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bearer() {
        let json = r#"{
            "type": "bearer",
            "bearer": [{"key": "token", "value": "abc123", "type": "string"}]
        }"#;

        let auth: Auth = serde_json::from_str(json).unwrap();
        assert_eq!(auth.auth_type, Some(AuthType::BEARER));
        assert_eq!(auth.attribute("token").unwrap().value_str().unwrap(), "abc123");
    }

    #[test]
    fn test_inactive_lists_are_kept() {
        let json = r#"{"type":"basic","basic":[{"key":"username","value":"u"}],"oauth2":[{"key":"leftover","value":"z"}]}"#;
        let auth: Auth = serde_json::from_str(json).unwrap();
        assert_eq!(auth.active_payload().unwrap().len(), 1);
        assert_eq!(auth.oauth2.len(), 1);
        assert_eq!(serde_json::to_string(&auth).unwrap(), json);
    }

    #[test]
    fn test_unknown_type_parses_and_reports() {
        let json = r#"{"type":"apikey","apikey":[{"key":"in","value":"header"}]}"#;
        let auth: Auth = serde_json::from_str(json).unwrap();
        assert!(auth.basic.is_empty());
        assert_eq!(
            auth.active_payload().unwrap_err(),
            DomainError::UnknownVariant {
                field: "auth type",
                value: "apikey".to_string()
            }
        );
        assert_eq!(serde_json::to_string(&auth).unwrap(), json);
    }

    #[test]
    fn test_missing_payload_is_not_found() {
        let auth = Auth::new(AuthType::DIGEST);
        assert!(matches!(
            auth.active_payload(),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_missing_type_parses_without_payload() {
        let json = r#"{"basic":[{"key":"username","value":"u"}]}"#;
        let auth: Auth = serde_json::from_str(json).unwrap();
        assert_eq!(auth.auth_type, None);
        assert_eq!(auth.basic.len(), 1);
        assert_eq!(
            auth.active_payload().unwrap_err(),
            DomainError::NotFound {
                field: "auth type",
                name: "type".to_string()
            }
        );
        assert_eq!(serde_json::to_string(&auth).unwrap(), json);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let auth: Auth =
            serde_json::from_str(r#"{"type":"bearer","bearer":null,"basic":null}"#).unwrap();
        assert!(auth.bearer.is_empty());
        assert!(matches!(
            auth.active_payload(),
            Err(DomainError::NotFound { .. })
        ));
        assert_eq!(serde_json::to_string(&auth).unwrap(), r#"{"type":"bearer"}"#);
    }

    #[test]
    fn test_noauth_marker() {
        let json = r#"{"type":"noauth","noauth":null}"#;
        let auth: Auth = serde_json::from_str(json).unwrap();
        assert!(auth.active_payload().unwrap().is_empty());
        assert_eq!(serde_json::to_string(&auth).unwrap(), json);
    }

    #[test]
    fn test_basic_builder() {
        let auth = Auth::basic("alice", "secret").unwrap();
        assert_eq!(auth.attribute("password").unwrap().value_str().unwrap(), "secret");
        assert_eq!(
            serde_json::to_string(&auth).unwrap(),
            r#"{"type":"basic","basic":[{"key":"username","value":"alice","type":"string"},{"key":"password","value":"secret","type":"string"}]}"#
        );
    }

    #[test]
    fn test_with_attributes_rejects_slotless_scheme() {
        let err = Auth::with_attributes(AuthType::new("apikey"), Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::UnknownVariant { .. }));
    }

    #[test]
    fn test_attribute_value_not_string() {
        let attribute: AuthAttribute =
            serde_json::from_str(r#"{"key":"addTokenTo","value":true}"#).unwrap();
        assert!(matches!(
            attribute.value_str(),
            Err(DomainError::TypeMismatch { .. })
        ));
    }
}

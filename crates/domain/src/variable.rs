//! Collection, folder and request variables.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::opaque::{OpaqueValue, present};
use crate::tag::VariableType;

/// A key/value pair declared on a collection or item.
///
/// The value is opaque: producers store strings, numbers, booleans and even
/// objects here, and the `type` hint is not authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<OpaqueValue>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Keys this model does not know, kept in source order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variable {
    /// Creates a variable with a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: OpaqueValue) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Sets the type hint.
    #[must_use]
    pub fn with_type(mut self, variable_type: VariableType) -> Self {
        self.variable_type = Some(variable_type);
        self
    }

    /// Absent `disabled` means enabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unrecognized_type_is_kept() {
        let json = r#"{"key":"k","value":"v","type":"custom-unrecognized"}"#;
        let variable: Variable = serde_json::from_str(json).unwrap();
        assert_eq!(
            variable.variable_type,
            Some(VariableType::new("custom-unrecognized"))
        );
        assert_eq!(serde_json::to_string(&variable).unwrap(), json);
    }

    #[test]
    fn test_falsy_values_are_not_absent() {
        let json = r#"{"key":"","value":0,"disabled":false}"#;
        let variable: Variable = serde_json::from_str(json).unwrap();
        assert_eq!(variable.key.as_deref(), Some(""));
        assert_eq!(variable.disabled, Some(false));
        assert_eq!(serde_json::to_string(&variable).unwrap(), json);
    }

    #[test]
    fn test_null_value_round_trips() {
        let json = r#"{"key":"k","value":null}"#;
        let variable: Variable = serde_json::from_str(json).unwrap();
        assert!(variable.value.as_ref().unwrap().is_null());
        assert_eq!(serde_json::to_string(&variable).unwrap(), json);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let json = r#"{"key":"k","x-origin":{"tool":"newman"}}"#;
        let variable: Variable = serde_json::from_str(json).unwrap();
        assert_eq!(variable.extra["x-origin"]["tool"], "newman");
        assert_eq!(serde_json::to_string(&variable).unwrap(), json);
    }

    #[test]
    fn test_builder() {
        let value = OpaqueValue::from_serialize(&3).unwrap();
        let variable = Variable::new("retries", value).with_type(VariableType::NUMBER);
        assert!(!variable.is_disabled());
        assert_eq!(
            serde_json::to_string(&variable).unwrap(),
            r#"{"key":"retries","value":3,"type":"number"}"#
        );
    }
}

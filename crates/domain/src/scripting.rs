//! Scripts attached to lifecycle hooks.
//!
//! Script text is carried as plain lines. Nothing here parses or runs it.

#![allow(missing_docs)]

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::opaque::{OpaqueValue, present};
use crate::tag::EventListen;

/// A script body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Script MIME type, typically `text/javascript`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
    /// Source lines. A single string on input is read as one line.
    #[serde(default, deserialize_with = "lines", skip_serializing_if = "Vec::is_empty")]
    pub exec: Vec<String>,
    /// External script reference (URL string or URL object).
    #[serde(rename = "src", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub source: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Script {
    /// Creates a script from source lines.
    #[must_use]
    pub fn new(exec: Vec<String>) -> Self {
        Self {
            script_type: Some("text/javascript".to_string()),
            exec,
            ..Self::default()
        }
    }

    /// The lines joined with newlines.
    #[must_use]
    pub fn source_text(&self) -> String {
        self.exec.join("\n")
    }
}

fn lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<Lines>::deserialize(deserializer)? {
        Some(Lines::Many(lines)) => lines,
        Some(Lines::One(line)) => vec![line],
        None => Vec::new(),
    })
}

/// A script bound to a hook such as `test` or `prerequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen: Option<EventListen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Creates an event with a JavaScript body.
    #[must_use]
    pub fn new(listen: EventListen, exec: Vec<String>) -> Self {
        Self {
            listen: Some(listen),
            script: Some(Script::new(exec)),
            ..Self::default()
        }
    }

    /// Whether this event listens on `hook`.
    #[must_use]
    pub fn listens_on(&self, hook: &EventListen) -> bool {
        self.listen.as_ref() == Some(hook)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_event() {
        let json = r#"{
            "listen": "test",
            "script": {
                "type": "text/javascript",
                "exec": ["pm.test('ok', function () {", "});"]
            }
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.listens_on(&EventListen::TEST));
        let script = event.script.unwrap();
        assert_eq!(script.exec.len(), 2);
        assert_eq!(script.source_text(), "pm.test('ok', function () {\n});");
    }

    #[test]
    fn test_single_string_exec() {
        let script: Script = serde_json::from_str(r#"{"exec":"console.log(1)"}"#).unwrap();
        assert_eq!(script.exec, vec!["console.log(1)".to_string()]);
    }

    #[test]
    fn test_unknown_listen_round_trips() {
        let json = r#"{"listen":"beforeQuery","disabled":false}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.listen.as_ref().unwrap().as_str(), "beforeQuery");
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn test_src_object_kept_verbatim() {
        let json = r#"{"src":{"raw":"https://cdn/x.js"},"name":"lib"}"#;
        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&script).unwrap(), json);
    }

    #[test]
    fn test_builder_output() {
        let event = Event::new(EventListen::PRE_REQUEST, vec!["let a = 1;".to_string()]);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"listen":"prerequest","script":{"type":"text/javascript","exec":["let a = 1;"]}}"#
        );
    }
}

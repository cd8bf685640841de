//! Collection tree nodes.
//!
//! An [`Item`] is a request, a folder, or (the format does not forbid it) both.
//! There is no discriminant: a node with children acts as a folder, a node with
//! a request acts as a request, and both slots are kept independently.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::auth::Auth;
use crate::error::DomainResult;
use crate::opaque::{OpaqueValue, or_empty, present};
use crate::request::Request;
use crate::response::Response;
use crate::scripting::Event;
use crate::variable::Variable;

use super::info::Description;

const RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// A node of the collection tree.
///
/// Children are owned; there is no parent pointer. Callers building trees by
/// hand must not insert a node under itself or under one of its descendants.
///
/// Serializing and dropping work at any depth: children are written on a
/// stack segment grown on demand, and dropping flattens the tree first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// String or description object.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<OpaqueValue>,
    /// Variables scoped to this node.
    #[serde(rename = "variable", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
    /// Scripts scoped to this node.
    #[serde(rename = "event", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    /// Bare URL string or request object, kept verbatim.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub request: Option<OpaqueValue>,
    /// Saved response examples.
    #[serde(rename = "response", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,
    /// Child nodes, in display and run order.
    #[serde(
        rename = "item",
        default,
        deserialize_with = "or_empty",
        serialize_with = "children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Self>,
    /// Auth override for this node and its descendants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    /// Keys this model does not know (`protocolProfileBehavior`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an empty named node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut item = Self::default();
        item.name = Some(name.into());
        item
    }

    /// Creates a folder holding `items`.
    #[must_use]
    pub fn folder(name: impl Into<String>, items: Vec<Self>) -> Self {
        let mut item = Self::new(name);
        item.items = items;
        item
    }

    /// Creates a request node.
    ///
    /// # Errors
    ///
    /// Propagates request encoding failures.
    pub fn request(name: impl Into<String>, request: &Request) -> DomainResult<Self> {
        let mut item = Self::new(name);
        item.set_request(request)?;
        Ok(item)
    }

    /// Whether the node has children.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether the node carries a request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.request.is_some()
    }

    /// Stores `request` in object form.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures.
    pub fn set_request(&mut self, request: &Request) -> DomainResult<()> {
        self.request = Some(OpaqueValue::from_serialize(request)?);
        Ok(())
    }

    /// Stores a bare URL string as the request.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures.
    pub fn set_request_url(&mut self, url: &str) -> DomainResult<()> {
        self.request = Some(OpaqueValue::from_serialize(url)?);
        Ok(())
    }

    /// Decodes the stored request object.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`](crate::DomainError::TypeMismatch) when the
    /// request is stored as a bare URL string.
    pub fn request_typed(&self) -> DomainResult<Option<Request>> {
        self.request.as_ref().map(OpaqueValue::decode).transpose()
    }

    /// Description text, whichever form it is stored in.
    ///
    /// # Errors
    ///
    /// See [`Description::text_of`].
    pub fn description_text(&self) -> DomainResult<Option<String>> {
        self.description.as_ref().map(Description::text_of).transpose()
    }

    /// Appends a child.
    pub fn push(&mut self, child: Self) {
        self.items.push(child);
    }

    /// Pre-order traversal starting at this node.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            pending: vec![self],
        }
    }
}

impl Drop for Item {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.items);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.items);
        }
    }
}

fn children<S: Serializer>(items: &[Item], serializer: S) -> Result<S::Ok, S::Error> {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || items.serialize(serializer))
}

/// Lazy pre-order traversal over an item tree.
///
/// Yields a node, then each of its children left to right, recursively. The
/// only state is the stack of nodes not yet visited.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    pending: Vec<&'a Item>,
}

impl<'a> Walk<'a> {
    /// Traversal over a forest of roots, in order.
    #[must_use]
    pub fn over(roots: &'a [Item]) -> Self {
        Self {
            pending: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.items.iter().rev());
        Some(node)
    }
}

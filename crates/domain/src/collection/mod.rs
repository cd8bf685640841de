//! Collection root document.

mod info;
mod item;

pub use info::{Description, Information, Version};
pub use item::{Item, Walk};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::Auth;
use crate::opaque::or_empty;
use crate::scripting::Event;
use crate::variable::Variable;

/// Root of a collection document.
///
/// Only `info` is required. Root items are kept in document order, which is
/// also the display and run order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Header metadata.
    pub info: Information,
    /// Top-level items.
    #[serde(rename = "item", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Collection-wide scripts.
    #[serde(rename = "event", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    /// Collection-wide variables.
    #[serde(rename = "variable", default, deserialize_with = "or_empty", skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
    /// Default auth for every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    /// Keys this model does not know.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    /// Creates an empty collection claiming schema v2.1.0.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_info(Information::new(name))
    }

    /// Creates an empty collection around an existing header.
    #[must_use]
    pub fn with_info(info: Information) -> Self {
        Self {
            info,
            items: Vec::new(),
            events: Vec::new(),
            variables: Vec::new(),
            auth: None,
            extra: Map::new(),
        }
    }

    /// Adds an item to the collection root.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Pre-order traversal over every node in the tree.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(&self.items)
    }

    /// Number of nodes carrying a request, at any depth.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.walk().filter(|item| item.is_request()).count()
    }

    /// First node in pre-order whose name is `name`.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.walk().find(|item| item.name.as_deref() == Some(name))
    }
}

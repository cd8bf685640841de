//! Collection document codec.
//!
//! Parsing is atomic: a document either yields a complete tree or an error,
//! never a partial one.

use parcel_domain::{Collection, Item};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::serialization::{CodecError, WriteOptions, ensure_object, from_json_slice, to_json_bytes};

/// Parses a collection document.
///
/// # Errors
///
/// [`CodecError::MalformedDocument`] when the top-level value is not an object,
/// `info` or `info.name` is missing, or any field has an unusable shape;
/// [`CodecError::InvalidJson`] for syntax errors.
pub fn parse_collection(bytes: &[u8]) -> Result<Collection, CodecError> {
    let collection: Collection = parse_object(bytes, "collection")?;
    debug!(
        bytes = bytes.len(),
        name = %collection.info.name,
        root_items = collection.items.len(),
        nodes = collection.walk().count(),
        "parsed collection"
    );
    Ok(collection)
}

/// Parses a collection document from a string.
///
/// # Errors
///
/// See [`parse_collection`].
pub fn parse_collection_str(json: &str) -> Result<Collection, CodecError> {
    parse_collection(json.as_bytes())
}

/// Writes a collection document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_collection(
    collection: &Collection,
    options: &WriteOptions,
) -> Result<Vec<u8>, CodecError> {
    let bytes = to_json_bytes(collection, options)?;
    debug!(
        bytes = bytes.len(),
        name = %collection.info.name,
        style = ?options.style,
        "serialized collection"
    );
    Ok(bytes)
}

/// Writes a collection document to a string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_collection_string(
    collection: &Collection,
    options: &WriteOptions,
) -> Result<String, CodecError> {
    Ok(String::from_utf8(serialize_collection(collection, options)?)?)
}

/// Parses a single item subtree.
///
/// # Errors
///
/// See [`parse_collection`].
pub fn parse_item(bytes: &[u8]) -> Result<Item, CodecError> {
    let item: Item = parse_object(bytes, "item")?;
    debug!(bytes = bytes.len(), nodes = item.walk().count(), "parsed item");
    Ok(item)
}

/// Writes a single item subtree.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_item(item: &Item, options: &WriteOptions) -> Result<Vec<u8>, CodecError> {
    to_json_bytes(item, options)
}

/// Parses any record of the model from a JSON object.
///
/// # Errors
///
/// See [`parse_collection`].
pub fn parse_entity<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    parse_object(bytes, std::any::type_name::<T>())
}

/// Writes any record of the model.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_entity<T: Serialize>(value: &T, options: &WriteOptions) -> Result<Vec<u8>, CodecError> {
    to_json_bytes(value, options)
}

fn parse_object<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T, CodecError> {
    ensure_object(bytes)
        .and_then(|()| from_json_slice(bytes))
        .inspect_err(|e| warn!(bytes = bytes.len(), error = %e, "rejected {what}"))
}

//! Parcel Infrastructure - JSON codec
//!
//! Reads and writes Postman collection documents as the model in
//! `parcel-domain`. Codec activity is reported through `tracing`; installing a
//! subscriber is left to the host application.

pub mod document;
pub mod serialization;

pub use document::{
    parse_collection, parse_collection_str, parse_entity, parse_item, serialize_collection,
    serialize_collection_string, serialize_entity, serialize_item,
};
pub use serialization::{
    CodecError, JsonStyle, WriteOptions, ensure_object, from_json_slice, to_json_bytes,
    to_json_string,
};

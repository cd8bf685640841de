//! Opaque JSON values.
//!
//! Several Postman fields have no fixed shape: a description may be a string or
//! an object, a version a number or an object, a request a bare URL or a full
//! request object. [`OpaqueValue`] keeps the exact source text of such a value
//! and decodes it only when asked.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// The JSON shape held by an [`OpaqueValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any JSON number
    Number,
    /// A JSON string
    String,
    /// A JSON array
    Array,
    /// A JSON object
    Object,
}

impl ValueKind {
    /// Lowercase name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON value kept byte-for-byte as it appeared in the source.
///
/// Serializing an unmodified value writes the original text back unchanged,
/// in compact and pretty output alike. Typed accessors never coerce: asking a
/// string for a number is a [`DomainError::TypeMismatch`].
///
/// An explicit `null` in the source is a stored value. Absence is modelled by
/// the surrounding `Option`, never by this type.
#[derive(Clone)]
pub struct OpaqueValue(Box<RawValue>);

impl OpaqueValue {
    /// Wraps JSON text. Surrounding whitespace is dropped; everything else is
    /// kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidJson`] if the text is not one JSON value.
    pub fn from_json(json: impl Into<String>) -> DomainResult<Self> {
        RawValue::from_string(json.into())
            .map(Self)
            .map_err(|e| DomainError::InvalidJson(e.to_string()))
    }

    /// Serializes any value into its compact JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidJson`] if the value cannot be represented
    /// as JSON (for example a map with non-string keys).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> DomainResult<Self> {
        serde_json::value::to_raw_value(value)
            .map(Self)
            .map_err(|e| DomainError::InvalidJson(e.to_string()))
    }

    /// The stored JSON text.
    #[must_use]
    pub fn as_json(&self) -> &str {
        self.0.get()
    }

    /// The shape of the stored value, read from its first byte.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self.0.get().trim_start().as_bytes().first() {
            Some(b'"') => ValueKind::String,
            Some(b'{') => ValueKind::Object,
            Some(b'[') => ValueKind::Array,
            Some(b't' | b'f') => ValueKind::Bool,
            Some(b'n') => ValueKind::Null,
            _ => ValueKind::Number,
        }
    }

    /// Whether the source explicitly contained `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind() == ValueKind::Null
    }

    /// Decodes a JSON string.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] unless the value is a string.
    pub fn as_str(&self) -> DomainResult<String> {
        self.extract(ValueKind::String, "string")
    }

    /// Decodes a JSON boolean.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] unless the value is a boolean.
    pub fn as_bool(&self) -> DomainResult<bool> {
        self.extract(ValueKind::Bool, "boolean")
    }

    /// Decodes any JSON number as `f64`.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] unless the value is a number that fits.
    pub fn as_f64(&self) -> DomainResult<f64> {
        self.extract(ValueKind::Number, "number")
    }

    /// Decodes an integral JSON number.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] for non-numbers, fractions and values
    /// outside the `i64` range.
    pub fn as_i64(&self) -> DomainResult<i64> {
        self.extract(ValueKind::Number, "integer")
    }

    /// Decodes a non-negative integral JSON number.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] for anything that is not a `u64`.
    pub fn as_u64(&self) -> DomainResult<u64> {
        self.extract(ValueKind::Number, "unsigned integer")
    }

    /// Decodes a JSON array into generic values.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] unless the value is an array.
    pub fn as_array(&self) -> DomainResult<Vec<Value>> {
        self.extract(ValueKind::Array, "array")
    }

    /// Decodes a JSON object into a generic map.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] unless the value is an object.
    pub fn as_object(&self) -> DomainResult<Map<String, Value>> {
        self.extract(ValueKind::Object, "object")
    }

    /// Decodes the value into any deserializable type.
    ///
    /// # Errors
    ///
    /// [`DomainError::TypeMismatch`] naming `T` when the stored JSON does not
    /// fit it.
    pub fn decode<T: DeserializeOwned>(&self) -> DomainResult<T> {
        serde_json::from_str(self.0.get()).map_err(|_| self.mismatch(std::any::type_name::<T>()))
    }

    fn extract<T: DeserializeOwned>(&self, kind: ValueKind, expected: &'static str) -> DomainResult<T> {
        if self.kind() != kind {
            return Err(self.mismatch(expected));
        }
        serde_json::from_str(self.0.get()).map_err(|_| self.mismatch(expected))
    }

    fn mismatch(&self, expected: &'static str) -> DomainError {
        DomainError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.get() == other.0.get()
    }
}

impl Eq for OpaqueValue {}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.0.get()).finish()
    }
}

impl fmt::Display for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.get())
    }
}

impl Serialize for OpaqueValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OpaqueValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(Self)
    }
}

/// Deserializes an optional opaque field, keeping an explicit `null`.
///
/// Plain `Option<T>` maps `null` to `None`, which would make the key vanish on
/// output. Fields using this helper must also carry `#[serde(default)]`.
pub(crate) fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<OpaqueValue>, D::Error> {
    OpaqueValue::deserialize(deserializer).map(Some)
}

/// Deserializes a sequence field, reading an explicit `null` as empty.
///
/// Empty sequences are omitted on output, so `"item": null` is written back
/// without the key. Fields using this helper must also carry `#[serde(default)]`.
pub(crate) fn or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

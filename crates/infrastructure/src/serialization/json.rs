//! JSON serialization helpers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is JSON but not a collection document (or entity) of the
    /// expected shape. The whole parse is abandoned.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The input is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl CodecError {
    /// Sorts a deserialization failure into syntax or structure.
    #[must_use]
    pub fn from_parse(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::MalformedDocument(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::InvalidJson(err),
        }
    }

    /// Whether this error means the document had the wrong shape.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }
}

/// Layout of written JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonStyle {
    /// No whitespace between tokens.
    Compact,
    /// One member per line.
    Pretty {
        /// Spaces per nesting level.
        indent: u8,
    },
}

/// Output options for the writer.
///
/// The default is compact with no trailing newline, which reproduces compact
/// input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Token layout.
    pub style: JsonStyle,
    /// Append `\n` after the document.
    pub trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::compact()
    }
}

impl WriteOptions {
    /// Compact output.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            style: JsonStyle::Compact,
            trailing_newline: false,
        }
    }

    /// Two-space pretty output with a trailing newline, for clean diffs.
    #[must_use]
    pub const fn stable() -> Self {
        Self {
            style: JsonStyle::Pretty { indent: 2 },
            trailing_newline: true,
        }
    }
}

/// Serializes a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_bytes<T: Serialize + ?Sized>(
    value: &T,
    options: &WriteOptions,
) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::new();
    match options.style {
        JsonStyle::Compact => serde_json::to_writer(&mut buffer, value)?,
        JsonStyle::Pretty { indent } => {
            let indent = vec![b' '; usize::from(indent)];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            value.serialize(&mut serializer)?;
        }
    }
    if options.trailing_newline {
        buffer.push(b'\n');
    }
    Ok(buffer)
}

/// Serializes a value to a JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_string<T: Serialize + ?Sized>(
    value: &T,
    options: &WriteOptions,
) -> Result<String, CodecError> {
    Ok(String::from_utf8(to_json_bytes(value, options)?)?)
}

/// Deserializes JSON bytes with no nesting limit.
///
/// serde_json's recursion limit is off; the stack is grown on demand instead,
/// so depth is bounded by memory. Trailing non-whitespace after the value is
/// rejected.
///
/// # Errors
///
/// [`CodecError::InvalidJson`] for syntax errors,
/// [`CodecError::MalformedDocument`] when the JSON does not fit `T`.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(CodecError::from_parse)?;
    deserializer.end().map_err(CodecError::from_parse)?;
    Ok(value)
}

/// Checks that the first token of `bytes` opens an object.
///
/// # Errors
///
/// [`CodecError::MalformedDocument`] when the top-level value is something
/// else. Empty input is left for the parser to report.
pub fn ensure_object(bytes: &[u8]) -> Result<(), CodecError> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | None => Ok(()),
        Some(_) => Err(CodecError::MalformedDocument(
            "top-level value is not a JSON object".to_string(),
        )),
    }
}

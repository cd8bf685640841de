//! Domain error types

use thiserror::Error;

use crate::opaque::ValueKind;

/// Errors raised by typed accessors over the collection model.
///
/// None of these abort a document parse. They surface only at the point where a
/// caller asks for a specific shape or variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An opaque value holds a different JSON shape than the one requested.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The shape the accessor asked for.
        expected: &'static str,
        /// The shape actually stored.
        found: ValueKind,
    },

    /// A tagged union carries a discriminator this model has no slot for.
    #[error("unknown {field} variant: {value:?}")]
    UnknownVariant {
        /// Name of the discriminator field (`type`, `mode`).
        field: &'static str,
        /// The discriminator exactly as found.
        value: String,
    },

    /// A lookup found nothing under the requested name.
    #[error("{field} not found: {name:?}")]
    NotFound {
        /// What kind of thing was looked up.
        field: &'static str,
        /// The name or variant that was requested.
        name: String,
    },

    /// Text handed to an opaque constructor is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = DomainError::TypeMismatch {
            expected: "string",
            found: ValueKind::Object,
        };
        assert_eq!(err.to_string(), "type mismatch: expected string, found object");
    }

    #[test]
    fn test_unknown_variant_message_quotes_value() {
        let err = DomainError::UnknownVariant {
            field: "auth type",
            value: "apikey".to_string(),
        };
        assert_eq!(err.to_string(), "unknown auth type variant: \"apikey\"");
    }
}

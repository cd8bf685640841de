//! JSON reading and writing for collection documents.
//!
//! Reading disables serde_json's nesting limit so deep folder trees are
//! accepted. Writing offers compact output for exact round trips and a stable
//! pretty style for files kept under version control. Opaque regions are
//! written verbatim in both styles.

mod json;

pub use json::*;

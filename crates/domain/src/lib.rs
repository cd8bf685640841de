//! Parcel Domain - Postman collection data model
//!
//! In-memory model of the Postman collection format v2.1. Fields whose JSON
//! shape varies between producers are held as [`OpaqueValue`]s and reproduced
//! byte-for-byte. Keys the model does not know are kept on every record.
//! Open-ended discriminators are string newtypes, never closed enums.
//!
//! All types here are pure Rust with no I/O.

pub mod auth;
pub mod collection;
pub mod cookie;
pub mod error;
pub mod opaque;
pub mod proxy;
pub mod request;
pub mod response;
pub mod scripting;
pub mod tag;
pub mod tls;
pub mod variable;

pub use auth::{Auth, AuthAttribute};
pub use collection::{Collection, Description, Information, Item, Version, Walk};
pub use cookie::Cookie;
pub use error::{DomainError, DomainResult};
pub use opaque::{OpaqueValue, ValueKind};
pub use proxy::ProxyConfig;
pub use request::{
    BodyPayload, File, FormParameter, Request, RequestBody, RequestHeader, UrlEncodedParameter,
};
pub use response::Response;
pub use scripting::{Event, Script};
pub use tag::{AuthType, EventListen, RequestBodyMode, VariableType};
pub use tls::{Certificate, CertificateSource};
pub use variable::Variable;

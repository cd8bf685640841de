//! Request records.

mod body;
mod header;
mod spec;

pub use body::{BodyPayload, File, FormParameter, RequestBody, UrlEncodedParameter};
pub use header::RequestHeader;
pub use spec::Request;

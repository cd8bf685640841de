//! Authentication blocks for collections, folders and requests.

mod types;

pub use types::{Auth, AuthAttribute};

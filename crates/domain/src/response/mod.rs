//! Sample responses saved on request items.

mod spec;

pub use spec::Response;

//! Channel queries.

mod query;
mod types;

pub use query::*;
pub use types::*;

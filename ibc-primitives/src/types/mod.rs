mod any;
mod error;

pub use any::*;
pub use error::*;

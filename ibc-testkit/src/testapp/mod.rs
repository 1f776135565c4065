pub mod ibc;
pub mod store;

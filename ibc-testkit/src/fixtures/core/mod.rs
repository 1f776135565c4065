pub mod channel;
pub mod client;
pub mod connection;
pub mod context;

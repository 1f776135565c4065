pub mod conn_close;
pub mod conn_open_ack;
pub mod conn_open_init;
pub mod conn_open_timeout;
pub mod conn_open_try;

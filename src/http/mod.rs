//! HTTP serving.
//!
//! Binds the listener, serves the router, and drains in-flight connections
//! gracefully on SIGTERM/Ctrl+C.

mod server;
mod shutdown;

pub use server::start_server;

//! HTTP server module.
//!
//! Binds the configured address, serves the router and drains in-flight
//! connections on SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_on;

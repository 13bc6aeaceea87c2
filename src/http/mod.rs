//! HTTP server module.
//!
//! Binds the configured address and serves the router until a shutdown
//! signal arrives. On SIGTERM/SIGINT the listener stops accepting new
//! connections and drains in-flight requests.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

//! Lazaro data service.
//!
//! A small HTTP service that reports its own status together with basic host
//! facts, and advertises a fixed set of capabilities.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use host::{HostProbe, SystemHost};
pub use routes::create_router;
pub use state::AppState;

//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::host::{HostProbe, SystemHost};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the probe used to read host
/// facts. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub host: Arc<dyn HostProbe>,
}

impl AppState {
    /// Creates application state that reports facts about the running machine.
    pub fn new(config: AppConfig) -> Self {
        Self::with_host(config, SystemHost)
    }

    /// Creates application state with a specific host probe.
    pub fn with_host(config: AppConfig, host: impl HostProbe + 'static) -> Self {
        Self {
            config: Arc::new(config),
            host: Arc::new(host),
        }
    }
}

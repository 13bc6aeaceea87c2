//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{address}': {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Parse the configured `host:port` into a socket address.
pub fn resolve_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let address = config.bind_address();
    address
        .parse()
        .map_err(|source| ServerError::Address { address, source })
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = resolve_addr(config)?;
    let handle = Handle::new();

    tracing::info!(%addr, service = %config.service.name, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_addr() {
        let addr = resolve_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 5000)));
    }

    #[test]
    fn test_resolve_rejects_hostname() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();
        let err = resolve_addr(&config).unwrap_err();
        assert!(matches!(err, ServerError::Address { .. }));
    }
}

//! Health check endpoint for process supervisors.
//!
//! Provides a liveness probe that returns 200 OK whenever the process can
//! answer HTTP. Unlike `/`, it reads no host facts.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}

//! Capabilities endpoint.
//!
//! `/api/process-data` is a declared extension point: it advertises what the
//! service is meant to do and performs no processing of its own.

use axum::Json;
use serde::Serialize;

pub const STATUS_READY: &str = "Ready";

/// Advertised capabilities, in reporting order
pub const CAPABILITIES: [&str; 3] = ["data-analysis", "script-execution", "system-monitoring"];

#[derive(Debug, Clone, Serialize)]
pub struct CapabilitiesResponse {
    pub status: &'static str,
    pub capabilities: &'static [&'static str],
}

impl Default for CapabilitiesResponse {
    fn default() -> Self {
        Self {
            status: STATUS_READY,
            capabilities: &CAPABILITIES,
        }
    }
}

pub async fn capabilities() -> Json<CapabilitiesResponse> {
    Json(CapabilitiesResponse::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_document() {
        let json = serde_json::to_value(CapabilitiesResponse::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Ready",
                "capabilities": ["data-analysis", "script-execution", "system-monitoring"],
            })
        );
    }
}

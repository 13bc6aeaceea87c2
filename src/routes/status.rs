//! Service status endpoint.
//!
//! Reports the service identity, a fixed "Active" marker, host facts and the
//! local time at which the request was handled.

use axum::{extract::State, Json};
use chrono::Local;
use serde::Serialize;
use tracing::instrument;

use crate::host::SystemFacts;
use crate::state::AppState;

pub const STATUS_ACTIVE: &str = "Active";

/// ISO-8601 local time with microseconds and no offset, e.g. `2024-05-01T12:00:00.000000`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub service: String,
    pub status: &'static str,
    pub system: SystemFacts,
    pub time: String,
}

impl StatusResponse {
    /// Snapshot the service status at the current instant.
    pub fn capture(state: &AppState) -> Self {
        Self {
            service: state.config.service.name.clone(),
            status: STATUS_ACTIVE,
            system: SystemFacts::collect(state.host.as_ref()),
            time: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[instrument(skip_all)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let response = StatusResponse::capture(&state);
    tracing::debug!(os = %response.system.os, load = ?response.system.load, "Collected host facts");
    Json(response)
}

//! Liveness probe for the edge binary.

use axum::Json;
use serde::Serialize;

/// Body returned by the liveness probe.
#[derive(Clone, Copy, Debug, Serialize)]
pub(crate) struct HealthStatus {
    status: &'static str,
}

/// Report the edge process as alive. No upstream calls are made here.
pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

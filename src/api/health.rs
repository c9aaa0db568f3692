//! Liveness probe.

use axum::{extract::State, Json};

use crate::models::HealthReport;
use crate::AppState;

/// GET /api/health - Report that the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::connected(&state.config.environment))
}

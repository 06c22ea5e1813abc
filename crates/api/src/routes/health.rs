//! Liveness check for the catalog service.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// The service still answers when Postgres is unreachable; `status` then
/// reads `degraded` so a load balancer can tell the two apart.
#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = pcshowdown_db::health_check(&state.pool).await.is_ok();
    if !reachable {
        tracing::warn!("Health check could not reach the database");
    }
    Json(HealthReport::new(reachable))
}

/// `/health`, mounted beside the API tree rather than inside it.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}

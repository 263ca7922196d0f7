use axum::{extract::State, Json};

use crate::analytics::stats::{compute_stats, AnalyticsStats};
use crate::state::AppState;

/// GET /api/analytics/stats
/// Recomputed from a fresh snapshot on every call.
pub async fn handle_stats(State(state): State<AppState>) -> Json<AnalyticsStats> {
    let (jobs, applications) = state.store.snapshot().await;
    Json(compute_stats(&jobs, &applications))
}

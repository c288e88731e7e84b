//! Dashboard handler: headline KPIs plus the latest activity.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use solar_core::dashboard::{compute_dashboard_stats, DashboardStats};
use solar_core::models::Activity;
use solar_db::repositories::{ActivityRepo, InstallationRepo, TicketRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of feed entries shown on the dashboard.
pub const DASHBOARD_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activity: Vec<Activity>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tickets = TicketRepo::list_all(&state.store).await;
    let installations = InstallationRepo::list_all(&state.store).await;
    let stats = compute_dashboard_stats(&tickets, &installations, Utc::now());
    let recent_activity = ActivityRepo::list_recent(&state.store, DASHBOARD_ACTIVITY_LIMIT).await;

    Ok(Json(DataResponse {
        data: DashboardResponse {
            stats,
            recent_activity,
        },
    }))
}

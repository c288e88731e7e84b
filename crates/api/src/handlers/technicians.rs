use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use solar_core::error::CoreError;
use solar_core::models::{Installation, Technician, Ticket};
use solar_core::query::{open_tickets, sort_newest_first};
use solar_core::types::EntityId;
use solar_db::repositories::{InstallationRepo, TechnicianRepo, TicketRepo};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::ActiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A technician's workload: assigned installations and unfinished tickets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianSummary {
    pub technician: Technician,
    pub installations: Vec<Installation>,
    pub open_tickets: Vec<Ticket>,
}

/// GET /api/v1/technicians
pub async fn list_technicians(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ActiveParams>,
) -> AppResult<impl IntoResponse> {
    let technicians = if params.active {
        TechnicianRepo::list_active(&state.store).await
    } else {
        TechnicianRepo::list_all(&state.store).await
    };

    Ok(Json(DataResponse { data: technicians }))
}

/// GET /api/v1/technicians/{id}
pub async fn get_technician(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let technician = TechnicianRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Technician", id))?;

    let installations = InstallationRepo::find_by_technician_id(&state.store, &technician.id).await;
    let assigned = TicketRepo::find_by_technician_id(&state.store, &technician.id).await;
    let mut open = open_tickets(&assigned);
    sort_newest_first(&mut open);

    Ok(Json(DataResponse {
        data: TechnicianSummary {
            technician,
            installations,
            open_tickets: open,
        },
    }))
}

//! Handlers for installations: search/filter listing, detail with tickets,
//! creation and partial updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use solar_core::error::CoreError;
use solar_core::models::{CreateInstallation, Installation, Panel, Ticket, UpdateInstallation};
use solar_core::query::{filter_installations, sort_newest_first, InstallationFilter};
use solar_core::roles::actions;
use solar_core::types::EntityId;
use solar_db::repositories::{InstallationRepo, TicketRepo};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::ActingRole;
use crate::response::DataResponse;
use crate::state::AppState;

/// An installation with every ticket raised against it, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationDetail {
    pub installation: Installation,
    pub capacity_watts: u64,
    pub tickets: Vec<Ticket>,
}

/// GET /api/v1/installations
///
/// `?search=` matches client, site, address or city case-insensitively;
/// `?status=` narrows the result further.
pub async fn list_installations(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<InstallationFilter>,
) -> AppResult<impl IntoResponse> {
    let base = match filter.search_term() {
        Some(query) => InstallationRepo::search(&state.store, query).await,
        None => InstallationRepo::list_all(&state.store).await,
    };
    let installations = filter_installations(base, &filter);

    Ok(Json(DataResponse { data: installations }))
}

/// GET /api/v1/installations/{id}
pub async fn get_installation(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let installation = InstallationRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Installation", id))?;

    let mut tickets = TicketRepo::find_by_installation_id(&state.store, &installation.id).await;
    sort_newest_first(&mut tickets);

    Ok(Json(DataResponse {
        data: InstallationDetail {
            capacity_watts: installation.capacity_watts(),
            installation,
            tickets,
        },
    }))
}

/// POST /api/v1/installations
///
/// Blank panel rows left over from the form are dropped before storing.
pub async fn create_installation(
    role: ActingRole,
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateInstallation>,
) -> AppResult<impl IntoResponse> {
    role.require(actions::CREATE)?;
    if input.assigned_technician_id.is_some() {
        role.require(actions::ASSIGN)?;
    }

    input.panels.retain(Panel::is_complete);
    let installation = InstallationRepo::create(&state.store, input).await?;

    tracing::info!(installation_id = %installation.id, "Installation created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: installation })))
}

/// PUT /api/v1/installations/{id}
pub async fn update_installation(
    role: ActingRole,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateInstallation>,
) -> AppResult<impl IntoResponse> {
    role.require(actions::UPDATE)?;
    if input.assigned_technician_id.is_some() {
        role.require(actions::ASSIGN)?;
    }

    let installation = InstallationRepo::update(&state.store, &id, input).await?;

    tracing::info!(installation_id = %installation.id, "Installation updated");
    Ok(Json(DataResponse { data: installation }))
}

//! Handlers for tickets: listing with filters, detail, creation, partial
//! updates, status changes and the append-only notes/parts lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use solar_core::error::CoreError;
use solar_core::models::{
    CreateTicket, Installation, NewNote, NewPart, Technician, Ticket, UpdateTicket,
};
use solar_core::query::{filter_tickets, narrow_for_role};
use solar_core::roles::actions;
use solar_core::status::{TicketPriority, TicketStatus, TicketType};
use solar_core::types::EntityId;
use solar_db::repositories::{InstallationRepo, TechnicianRepo, TicketRepo};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::ActingRole;
use crate::query::TicketListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body accepted by the ticket creation endpoints.
///
/// New tickets always start `open` and unassigned, whatever the client sends.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketRequest {
    pub installation_id: EntityId,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub priority: TicketPriority,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<NewTicketRequest> for CreateTicket {
    fn from(req: NewTicketRequest) -> Self {
        CreateTicket {
            installation_id: req.installation_id,
            ticket_type: req.ticket_type,
            priority: req.priority,
            status: TicketStatus::Open,
            title: req.title,
            description: req.description,
            assigned_technician_id: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: TicketStatus,
}

/// A ticket with its related records. Either may be absent when the
/// reference dangles.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub installation: Option<Installation>,
    pub technician: Option<Technician>,
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /api/tickets
///
/// Returns the created ticket without the `data` envelope.
pub async fn create_ticket_bare(
    role: ActingRole,
    State(state): State<AppState>,
    AppJson(input): AppJson<NewTicketRequest>,
) -> AppResult<impl IntoResponse> {
    let ticket = create(role, &state, input).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// POST /api/v1/tickets
pub async fn create_ticket(
    role: ActingRole,
    State(state): State<AppState>,
    AppJson(input): AppJson<NewTicketRequest>,
) -> AppResult<impl IntoResponse> {
    let ticket = create(role, &state, input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}

async fn create(role: ActingRole, state: &AppState, input: NewTicketRequest) -> AppResult<Ticket> {
    role.require(actions::CREATE)?;

    let ticket = TicketRepo::create(&state.store, input.into())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error creating ticket"))?;

    tracing::info!(ticket_id = %ticket.id, installation_id = %ticket.installation_id, "Ticket created");
    Ok(ticket)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/tickets
///
/// Filters compose with AND; results are newest first. The technician role
/// only sees tickets assigned to `actingTechnicianId`.
pub async fn list_tickets(
    ActingRole(role): ActingRole,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TicketListParams>,
) -> AppResult<impl IntoResponse> {
    let tickets = TicketRepo::list_all(&state.store).await;
    let visible = narrow_for_role(tickets, role, params.acting_technician_id.as_deref())?;
    let tickets = filter_tickets(visible, &params.filter());

    Ok(Json(DataResponse { data: tickets }))
}

/// GET /api/v1/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let ticket = TicketRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Ticket", id))?;

    let installation = InstallationRepo::find_by_id(&state.store, &ticket.installation_id).await;
    let technician = match ticket.assigned_technician_id.as_deref() {
        Some(tech_id) => TechnicianRepo::find_by_id(&state.store, tech_id).await,
        None => None,
    };

    Ok(Json(DataResponse {
        data: TicketDetail {
            ticket,
            installation,
            technician,
        },
    }))
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// PUT /api/v1/tickets/{id}
///
/// Partial update. Changing the assignee additionally needs `assign`, and
/// changing the status needs `update_status`.
pub async fn update_ticket(
    role: ActingRole,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<UpdateTicket>,
) -> AppResult<impl IntoResponse> {
    role.require(actions::UPDATE)?;
    if input.assigned_technician_id.is_some() {
        role.require(actions::ASSIGN)?;
    }
    if input.status.is_some() {
        role.require(actions::UPDATE_STATUS)?;
    }

    let ticket = TicketRepo::update(&state.store, &id, input).await?;

    tracing::info!(ticket_id = %ticket.id, "Ticket updated");
    Ok(Json(DataResponse { data: ticket }))
}

/// PUT /api/v1/tickets/{id}/status
pub async fn change_status(
    role: ActingRole,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<StatusChangeRequest>,
) -> AppResult<impl IntoResponse> {
    role.require(actions::UPDATE_STATUS)?;

    let ticket = TicketRepo::change_status(&state.store, &id, input.status).await?;

    tracing::info!(ticket_id = %ticket.id, status = %ticket.status, "Ticket status changed");
    Ok(Json(DataResponse { data: ticket }))
}

/// POST /api/v1/tickets/{id}/notes
pub async fn add_note(
    role: ActingRole,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<NewNote>,
) -> AppResult<impl IntoResponse> {
    role.require_any(&[actions::UPDATE, actions::UPDATE_STATUS])?;

    let ticket = TicketRepo::add_note(&state.store, &id, input).await?;

    tracing::info!(ticket_id = %ticket.id, notes = ticket.internal_notes.len(), "Note added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}

/// POST /api/v1/tickets/{id}/parts
pub async fn add_part(
    role: ActingRole,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(input): AppJson<NewPart>,
) -> AppResult<impl IntoResponse> {
    role.require_any(&[actions::UPDATE, actions::UPDATE_STATUS])?;

    let ticket = TicketRepo::add_part(&state.store, &id, input).await?;

    tracing::info!(ticket_id = %ticket.id, parts_cost = ticket.parts_cost(), "Part added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: ticket })))
}

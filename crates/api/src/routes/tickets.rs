use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// Ticket routes mounted at `/tickets`.
///
/// ```text
/// GET    /                -> list_tickets
/// POST   /                -> create_ticket
/// GET    /{id}            -> get_ticket
/// PUT    /{id}            -> update_ticket
/// PUT    /{id}/status     -> change_status
/// POST   /{id}/notes      -> add_note
/// POST   /{id}/parts      -> add_part
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/{id}", get(tickets::get_ticket).put(tickets::update_ticket))
        .route("/{id}/status", put(tickets::change_status))
        .route("/{id}/notes", post(tickets::add_note))
        .route("/{id}/parts", post(tickets::add_part))
}

/// The unversioned creation endpoint, mounted at the root as
/// `POST /api/tickets`. Responds with the bare ticket.
pub fn bare_router() -> Router<AppState> {
    Router::new().route("/api/tickets", post(tickets::create_ticket_bare))
}

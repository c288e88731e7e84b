pub mod activities;
pub mod dashboard;
pub mod health;
pub mod installations;
pub mod session;
pub mod technicians;
pub mod tickets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard                                       KPIs + recent activity
///
/// /installations                                   list (?search=&status=), create
/// /installations/{id}                              detail, update
///
/// /tickets                                         list (filters), create
/// /tickets/{id}                                    detail, update
/// /tickets/{id}/status                             change status (PUT)
/// /tickets/{id}/notes                              append note (POST)
/// /tickets/{id}/parts                              append part (POST)
///
/// /technicians                                     list (?active=true)
/// /technicians/{id}                                workload summary
///
/// /activities                                      recent (?limit=)
/// /activities/{entity_type}/{entity_id}            per-entity history
///
/// /session/role                                    get, set
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/installations", installations::router())
        .nest("/tickets", tickets::router())
        .nest("/technicians", technicians::router())
        .nest("/activities", activities::router())
        .nest("/session", session::router())
}

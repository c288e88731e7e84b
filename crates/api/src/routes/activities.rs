use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity feed routes mounted at `/activities`.
///
/// ```text
/// GET    /                               -> list_recent
/// GET    /{entity_type}/{entity_id}      -> list_for_entity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activities::list_recent))
        .route("/{entity_type}/{entity_id}", get(activities::list_for_entity))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::technicians;
use crate::state::AppState;

/// Technician routes mounted at `/technicians`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(technicians::list_technicians))
        .route("/{id}", get(technicians::get_technician))
}

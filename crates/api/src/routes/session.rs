use axum::routing::get;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Session routes mounted at `/session`.
pub fn router() -> Router<AppState> {
    Router::new().route("/role", get(session::get_role).put(session::set_role))
}

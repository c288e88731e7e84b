use axum::routing::get;
use axum::Router;

use crate::handlers::installations;
use crate::state::AppState;

/// Installation routes mounted at `/installations`.
///
/// ```text
/// GET    /          -> list_installations
/// POST   /          -> create_installation
/// GET    /{id}      -> get_installation
/// PUT    /{id}      -> update_installation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(installations::list_installations).post(installations::create_installation),
        )
        .route(
            "/{id}",
            get(installations::get_installation).put(installations::update_installation),
        )
}

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use solar_core::status::EntityType;
use solar_core::types::EntityId;
use solar_db::repositories::activity_repo::DEFAULT_RECENT_LIMIT;
use solar_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/activities
///
/// Most recent entries first. `?limit=` defaults to 20 and larger values
/// are clamped to 200; no error is returned for an over-limit request.
pub async fn list_recent(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let activities = ActivityRepo::list_recent(&state.store, limit).await;

    Ok(Json(DataResponse { data: activities }))
}

/// GET /api/v1/activities/{entity_type}/{entity_id}
pub async fn list_for_entity(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, EntityId)>,
) -> AppResult<impl IntoResponse> {
    let entity_type: EntityType = entity_type.parse()?;
    let activities = ActivityRepo::find_by_entity(&state.store, &entity_id, entity_type).await;

    Ok(Json(DataResponse { data: activities }))
}

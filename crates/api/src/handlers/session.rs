//! Role selection. The chosen role is a stored preference that every later
//! request acts under.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use solar_core::roles::Role;
use solar_db::repositories::PreferenceRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::rbac::ActingRole;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RolePayload {
    pub role: Role,
}

/// GET /api/v1/session/role
pub async fn get_role(ActingRole(role): ActingRole) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: RolePayload { role },
    }))
}

/// PUT /api/v1/session/role
pub async fn set_role(
    State(state): State<AppState>,
    AppJson(input): AppJson<RolePayload>,
) -> AppResult<impl IntoResponse> {
    PreferenceRepo::set_current_role(&state.store, input.role).await;

    Ok(Json(DataResponse { data: input }))
}

//! Role-based access control.
//!
//! There is no authentication: the acting role is whatever was last stored
//! under the role preference. [`ActingRole`] reads it per request and
//! handlers call [`ActingRole::require`] before any write.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use solar_core::error::CoreError;
use solar_core::roles::Role;
use solar_db::repositories::PreferenceRepo;

use crate::error::AppError;
use crate::state::AppState;

/// The role selected for this session.
///
/// ```ignore
/// async fn create(role: ActingRole, ...) -> AppResult<...> {
///     role.require(actions::CREATE)?;
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActingRole(pub Role);

impl FromRequestParts<AppState> for ActingRole {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(ActingRole(PreferenceRepo::current_role(&state.store).await))
    }
}

impl ActingRole {
    /// Reject with 403 Forbidden unless the role may perform `action`.
    pub fn require(self, action: &str) -> Result<(), AppError> {
        self.require_any(&[action])
    }

    /// Reject with 403 Forbidden unless the role may perform at least one of
    /// `actions`.
    pub fn require_any(self, actions: &[&str]) -> Result<(), AppError> {
        if actions.iter().any(|a| self.0.can(a)) {
            return Ok(());
        }
        tracing::debug!(role = self.0.as_str(), ?actions, "Permission denied");
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Role '{}' may not {}",
            self.0.as_str(),
            actions.join(" or ")
        ))))
    }
}

//! Role guards layered on [`AuthUser`].
//!
//! A missing or invalid token is still a 401; a valid token with the wrong
//! role is a 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pawmatch_core::error::CoreError;
use pawmatch_core::roles::{ROLE_ADMIN, ROLE_SHELTER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Catalog and shelter administration.
pub struct RequireAdmin(pub AuthUser);

/// Pet management: shelter workers and admins.
///
/// ```ignore
/// async fn delete_pet(RequireShelterStaff(user): RequireShelterStaff) -> AppResult<StatusCode> {
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
pub struct RequireShelterStaff(pub AuthUser);

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[&str],
    denial: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if allowed.contains(&user.role.as_str()) {
        Ok(user)
    } else {
        tracing::debug!(user_id = user.user_id, role = %user.role, "Role check failed");
        Err(AppError::Core(CoreError::Forbidden(denial.to_string())))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, &[ROLE_ADMIN], "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

impl FromRequestParts<AppState> for RequireShelterStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(
            parts,
            state,
            &[ROLE_SHELTER, ROLE_ADMIN],
            "Shelter or admin role required",
        )
        .await
        .map(RequireShelterStaff)
    }
}

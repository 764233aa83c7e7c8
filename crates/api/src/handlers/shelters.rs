//! Handlers for shelter management.
//!
//! Reads are public; writes are admin only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawmatch_core::error::CoreError;
use pawmatch_core::types::DbId;
use pawmatch_db::models::shelter::{CreateShelter, UpdateShelter};
use pawmatch_db::repositories::ShelterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/shelters
pub async fn list_shelters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shelters = ShelterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(shelters)))
}

/// GET /api/shelters/{id}
pub async fn get_shelter(
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shelter = ShelterRepo::find_by_id(&state.pool, shelter_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shelter",
            id: shelter_id,
        }))?;

    Ok(Json(DataResponse::new(shelter)))
}

/// POST /api/shelters
pub async fn create_shelter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateShelter>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    let input = CreateShelter {
        name: name.to_string(),
        ..input
    };

    let shelter = ShelterRepo::create(&state.pool, &input).await?;

    tracing::info!(shelter_id = shelter.id, user_id = admin.user_id, "Shelter created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(shelter))))
}

/// PUT /api/shelters/{id}
pub async fn update_shelter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateShelter>,
) -> AppResult<impl IntoResponse> {
    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }

    let shelter = ShelterRepo::update(&state.pool, shelter_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shelter",
            id: shelter_id,
        }))?;

    tracing::info!(shelter_id, user_id = admin.user_id, "Shelter updated");

    Ok(Json(DataResponse::new(shelter)))
}

/// DELETE /api/shelters/{id}
///
/// Refused with 409 while the shelter still houses pets.
pub async fn delete_shelter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pet_count = ShelterRepo::count_pets(&state.pool, shelter_id).await?;
    if pet_count > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Shelter {shelter_id} still has {pet_count} pet(s)"
        ))));
    }

    let deleted = ShelterRepo::delete(&state.pool, shelter_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Shelter",
            id: shelter_id,
        }));
    }

    tracing::info!(shelter_id, user_id = admin.user_id, "Shelter deleted");

    Ok(StatusCode::NO_CONTENT)
}

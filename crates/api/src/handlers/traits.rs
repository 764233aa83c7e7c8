//! Handlers for the trait catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawmatch_core::error::CoreError;
use pawmatch_core::traits::{normalize_category, normalize_trait_name};
use pawmatch_core::types::DbId;
use pawmatch_db::models::traits::{CreateTrait, TraitListParams};
use pawmatch_db::repositories::TraitRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/traits
///
/// List the catalog ordered by category then name, optionally restricted to
/// one category.
pub async fn list_traits(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<TraitListParams>,
) -> AppResult<impl IntoResponse> {
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let traits = TraitRepo::list(&state.pool, category).await?;

    Ok(Json(DataResponse::new(traits)))
}

/// GET /api/traits/{id}
pub async fn get_trait(
    State(state): State<AppState>,
    Path(trait_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = TraitRepo::find_by_id(&state.pool, trait_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trait",
            id: trait_id,
        }))?;

    Ok(Json(DataResponse::new(found)))
}

/// POST /api/traits
///
/// Add a trait to the catalog. Admin only. A duplicate name is a 409.
pub async fn create_trait(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTrait>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_trait_name(&input.trait_name)?;
    let category = normalize_category(input.category.as_deref())?;

    let created = TraitRepo::create(&state.pool, &name, category.as_deref()).await?;

    tracing::info!(
        trait_id = created.id,
        trait_name = %created.name,
        category = created.display_category(),
        user_id = admin.user_id,
        "Trait created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

//! Handlers for pet listings and pet management.
//!
//! Reads are public. Writes require [`RequireShelterStaff`]. Every write
//! canonicalizes species and gender before it reaches the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawmatch_core::error::CoreError;
use pawmatch_core::pet::{
    canonicalize_gender, dedup_trait_ids, resolve_page, total_pages, validate_age, validate_name,
};
use pawmatch_core::species::Species;
use pawmatch_core::traits::parse_trait_filter;
use pawmatch_core::types::DbId;
use pawmatch_db::models::pet::{CreatePet, PetFilter, PetListParams, PetPage, UpdatePet};
use pawmatch_db::repositories::PetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::middleware::rbac::RequireShelterStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/pets
///
/// Paginated listing. `traits` is a comma-separated list of trait names and a
/// pet must carry all of them.
pub async fn list_pets(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PetListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = build_filter(&params)?;
    let (page, per_page, _) = resolve_page(params.page, params.per_page);

    let (pets, total) = PetRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse::new(PetPage {
        pets,
        total,
        page,
        per_page,
        total_pages: total_pages(total, per_page),
    })))
}

/// GET /api/pets/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::find_by_id(&state.pool, pet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }))?;

    Ok(Json(DataResponse::new(pet)))
}

/// POST /api/pets
///
/// Create a pet and attach its traits. Unknown trait ids reject the whole
/// request and nothing is written.
pub async fn create_pet(
    RequireShelterStaff(user): RequireShelterStaff,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePet>,
) -> AppResult<impl IntoResponse> {
    let input = validate_create(input)?;

    let pet = PetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        pet_id = pet.pet.id,
        shelter_id = pet.pet.shelter_id,
        user_id = user.user_id,
        traits = input.trait_ids.len(),
        "Pet created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(pet))))
}

/// PUT /api/pets/{id}
///
/// Partial update. A present `trait_ids` replaces the whole trait set.
pub async fn update_pet(
    RequireShelterStaff(user): RequireShelterStaff,
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
    ValidJson(input): ValidJson<UpdatePet>,
) -> AppResult<impl IntoResponse> {
    let input = validate_update(input)?;

    let pet = PetRepo::update(&state.pool, pet_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }))?;

    tracing::info!(pet_id, user_id = user.user_id, "Pet updated");

    Ok(Json(DataResponse::new(pet)))
}

/// DELETE /api/pets/{id}
pub async fn delete_pet(
    RequireShelterStaff(user): RequireShelterStaff,
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PetRepo::delete(&state.pool, pet_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }));
    }

    tracing::info!(pet_id, user_id = user.user_id, "Pet deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Translate raw query parameters into a normalized repository filter.
fn build_filter(params: &PetListParams) -> Result<PetFilter, AppError> {
    let (_, per_page, offset) = resolve_page(params.page, params.per_page);

    let species = non_blank(params.species.as_deref())
        .map(Species::parse)
        .transpose()?
        .map(|s| s.as_str().to_string());
    let gender = non_blank(params.gender.as_deref())
        .map(canonicalize_gender)
        .transpose()?;

    Ok(PetFilter {
        species,
        breed: non_blank(params.breed.as_deref()).map(str::to_string),
        gender,
        shelter_id: params.shelter_id,
        trait_names: params
            .traits
            .as_deref()
            .map(parse_trait_filter)
            .unwrap_or_default(),
        limit: per_page,
        offset,
    })
}

fn validate_create(input: CreatePet) -> Result<CreatePet, CoreError> {
    Ok(CreatePet {
        name: validate_name(&input.name)?,
        species: Species::parse(&input.species)?.as_str().to_string(),
        breed: trimmed(input.breed),
        age: input.age.map(validate_age).transpose()?,
        gender: input.gender.as_deref().map(canonicalize_gender).transpose()?,
        description: input.description,
        shelter_id: input.shelter_id,
        trait_ids: dedup_trait_ids(&input.trait_ids),
    })
}

fn validate_update(input: UpdatePet) -> Result<UpdatePet, CoreError> {
    Ok(UpdatePet {
        name: input.name.as_deref().map(validate_name).transpose()?,
        species: input
            .species
            .as_deref()
            .map(|s| Species::parse(s).map(|s| s.as_str().to_string()))
            .transpose()?,
        breed: trimmed(input.breed),
        age: input.age.map(validate_age).transpose()?,
        gender: input.gender.as_deref().map(canonicalize_gender).transpose()?,
        description: input.description,
        shelter_id: input.shelter_id,
        trait_ids: input.trait_ids.as_deref().map(dedup_trait_ids),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn trimmed(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn create_input() -> CreatePet {
        CreatePet {
            name: "  Rex ".into(),
            species: "Dog".into(),
            breed: Some("  ".into()),
            age: Some(4),
            gender: Some("MALE".into()),
            description: None,
            shelter_id: 1,
            trait_ids: vec![3, 1, 3],
        }
    }

    #[test]
    fn create_input_is_canonicalized() {
        let input = validate_create(create_input()).unwrap();
        assert_eq!(input.name, "Rex");
        assert_eq!(input.species, "dog");
        assert_eq!(input.breed, None);
        assert_eq!(input.gender.as_deref(), Some("male"));
        assert_eq!(input.trait_ids, vec![3, 1]);
    }

    #[test]
    fn create_rejects_unknown_species() {
        let mut input = create_input();
        input.species = "dragon".into();
        assert_matches!(validate_create(input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_leaves_absent_fields_alone() {
        let input = validate_update(UpdatePet {
            species: Some("RABBIT".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(input.species.as_deref(), Some("rabbit"));
        assert!(input.name.is_none());
        assert!(input.trait_ids.is_none());
    }

    #[test]
    fn update_rejects_out_of_range_age() {
        let input = UpdatePet {
            age: Some(120),
            ..Default::default()
        };
        assert_matches!(validate_update(input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn filter_canonicalizes_and_paginates() {
        let params = PetListParams {
            species: Some("Cat".into()),
            breed: Some(" ".into()),
            traits: Some("Calm, Calm,High Energy".into()),
            page: Some(3),
            per_page: Some(10),
            ..Default::default()
        };
        let filter = build_filter(&params).unwrap();
        assert_eq!(filter.species.as_deref(), Some("cat"));
        assert_eq!(filter.breed, None);
        assert_eq!(filter.trait_names, vec!["Calm", "High Energy"]);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, 20);
    }

    #[test]
    fn filter_rejects_bad_gender() {
        let params = PetListParams {
            gender: Some("other".into()),
            ..Default::default()
        };
        assert_matches!(
            build_filter(&params),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}

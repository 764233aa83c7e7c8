//! Pet models, trait projections and DTOs.

use pawmatch_core::matching::MatchCandidate;
use pawmatch_core::traits::{group_by_category, GroupedTraits};
use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    #[serde(rename = "pet_id")]
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub shelter_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One `(pet, trait)` association joined with the trait's name and category.
#[derive(Debug, Clone, FromRow)]
pub struct PetTraitRow {
    pub pet_id: DbId,
    pub trait_id: DbId,
    pub name: String,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// A pet with its traits grouped by category.
#[derive(Debug, Clone, Serialize)]
pub struct PetDetail {
    #[serde(flatten)]
    pub pet: Pet,
    pub traits: GroupedTraits,
}

impl PetDetail {
    /// Attach the rows belonging to `pet` and group them by category.
    pub fn assemble(pet: Pet, rows: &[PetTraitRow]) -> Self {
        let traits = group_by_category(
            rows.iter()
                .filter(|r| r.pet_id == pet.id)
                .map(|r| (r.name.as_str(), r.category.as_deref())),
        );
        Self { pet, traits }
    }
}

impl MatchCandidate for PetDetail {
    fn name(&self) -> &str {
        &self.pet.name
    }

    fn species(&self) -> &str {
        &self.pet.species
    }

    fn trait_names(&self) -> Vec<&str> {
        self.traits
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// A pet returned by the quiz matcher. Not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchingPet {
    #[serde(flatten)]
    pub pet: PetDetail,
    pub matching_trait_count: i64,
}

/// One page of the pet listing.
#[derive(Debug, Clone, Serialize)]
pub struct PetPage {
    pub pets: Vec<PetDetail>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Request body for creating a pet. Validated by the handler before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub shelter_id: DbId,
    #[serde(default)]
    pub trait_ids: Vec<DbId>,
}

/// Request body for updating a pet. `trait_ids`, when present, replaces the
/// pet's whole trait set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePet {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub shelter_id: Option<DbId>,
    pub trait_ids: Option<Vec<DbId>>,
}

/// Query parameters for `GET /api/pets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetListParams {
    pub species: Option<String>,
    /// Case-insensitive substring match.
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub shelter_id: Option<DbId>,
    /// Comma-separated trait names; a pet must carry all of them.
    pub traits: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Normalized pet listing filter, built from [`PetListParams`] by the handler.
#[derive(Debug, Clone, Default)]
pub struct PetFilter {
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub shelter_id: Option<DbId>,
    pub trait_names: Vec<String>,
    pub limit: i64,
    pub offset: i64,
}

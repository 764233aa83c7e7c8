//! Repository for the `shelters` table.

use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::shelter::{CreateShelter, Shelter, ShelterWithPetCount, UpdateShelter};

/// Column list for `shelters` queries.
const COLUMNS: &str = "id, name, address, phone, email, created_at, updated_at";

/// Column list qualified with the `s` alias plus the pet count.
const COUNTED_COLUMNS: &str = "\
    s.id, s.name, s.address, s.phone, s.email, s.created_at, s.updated_at, \
    (SELECT COUNT(*) FROM pets p WHERE p.shelter_id = s.id) AS pet_count";

/// Provides CRUD operations for shelters.
pub struct ShelterRepo;

impl ShelterRepo {
    /// List all shelters with their pet counts, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShelterWithPetCount>, sqlx::Error> {
        let query = format!("SELECT {COUNTED_COLUMNS} FROM shelters s ORDER BY s.name, s.id");
        sqlx::query_as::<_, ShelterWithPetCount>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a shelter by its ID, including its pet count.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShelterWithPetCount>, sqlx::Error> {
        let query = format!("SELECT {COUNTED_COLUMNS} FROM shelters s WHERE s.id = $1");
        sqlx::query_as::<_, ShelterWithPetCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new shelter.
    pub async fn create(pool: &PgPool, input: &CreateShelter) -> Result<Shelter, sqlx::Error> {
        let query = format!(
            "INSERT INTO shelters (name, address, phone, email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shelter>(&query)
            .bind(input.name.trim())
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Update a shelter. Returns `None` if no shelter with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShelter,
    ) -> Result<Option<Shelter>, sqlx::Error> {
        let query = format!(
            "UPDATE shelters SET \
                 name = COALESCE($2, name), \
                 address = COALESCE($3, address), \
                 phone = COALESCE($4, phone), \
                 email = COALESCE($5, email) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shelter>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Number of pets currently assigned to a shelter.
    pub async fn count_pets(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pets WHERE shelter_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a shelter by ID. Returns `true` if a row was deleted.
    ///
    /// The `fk_pets_shelter` constraint still refuses the delete if a pet
    /// was added after the caller's pet-count check.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shelters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

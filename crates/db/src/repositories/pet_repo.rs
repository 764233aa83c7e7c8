//! Repository for the `pets` and `pet_traits` tables.
//!
//! Pet writes and their trait attachments share one transaction; an unknown
//! trait id rolls back the whole write.

use pawmatch_core::matching::rank_matches;
use pawmatch_core::species::Species;
use pawmatch_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::pet::{CreatePet, MatchingPet, Pet, PetDetail, PetFilter, PetTraitRow, UpdatePet};
use crate::repositories::TraitRepo;

/// Column list for `pets` queries.
const COLUMNS: &str = "\
    id, name, species, breed, age, gender, description, shelter_id, \
    created_at, updated_at";

/// Column list qualified with the `p` alias.
const P_COLUMNS: &str = "\
    p.id, p.name, p.species, p.breed, p.age, p.gender, p.description, p.shelter_id, \
    p.created_at, p.updated_at";

/// Failure modes of a pet insert or update.
#[derive(Debug, thiserror::Error)]
pub enum PetWriteError {
    #[error("Shelter with id {0} not found")]
    ShelterNotFound(DbId),

    #[error("Unknown trait ids: {}", join_ids(.0))]
    UnknownTraits(Vec<DbId>),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

fn join_ids(ids: &[DbId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Typed bind value for the dynamically-built listing query.
enum BindValue {
    BigInt(i64),
    Text(String),
    TextArray(Vec<String>),
}

/// Provides CRUD, filtered listing and quiz matching for pets.
pub struct PetRepo;

impl PetRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Find a pet by ID with its grouped traits.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PetDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        let Some(pet) = sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let mut conn = pool.acquire().await?;
        let rows = Self::load_traits(&mut conn, &[pet.id]).await?;
        Ok(Some(PetDetail::assemble(pet, &rows)))
    }

    /// List one page of pets matching `filter`, ordered by name then id.
    ///
    /// Returns the page and the total number of matching pets.
    pub async fn list(
        pool: &PgPool,
        filter: &PetFilter,
    ) -> Result<(Vec<PetDetail>, i64), sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_pet_filter(filter);

        let count_query = format!("SELECT COUNT(*) FROM pets p {where_clause}");
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);
        for val in &bind_values {
            count_q = match val {
                BindValue::BigInt(v) => count_q.bind(*v),
                BindValue::Text(v) => count_q.bind(v.as_str()),
                BindValue::TextArray(v) => count_q.bind(v.as_slice()),
            };
        }
        let total = count_q.fetch_one(pool).await?;

        let page_query = format!(
            "SELECT {P_COLUMNS} FROM pets p {where_clause} \
             ORDER BY p.name, p.id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let mut page_q = sqlx::query_as::<_, Pet>(&page_query);
        for val in &bind_values {
            page_q = match val {
                BindValue::BigInt(v) => page_q.bind(*v),
                BindValue::Text(v) => page_q.bind(v.as_str()),
                BindValue::TextArray(v) => page_q.bind(v.as_slice()),
            };
        }
        let pets = page_q
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await?;

        let mut conn = pool.acquire().await?;
        let details = Self::attach_traits(&mut conn, pets).await?;
        Ok((details, total))
    }

    /// Pets of `species` ranked by overlap with `desired_traits`.
    ///
    /// When `desired_traits` is non-empty only pets carrying at least one of
    /// them are loaded; ranking and tie-breaking happen in
    /// [`rank_matches`]. No pagination.
    pub async fn find_matches(
        pool: &PgPool,
        species: Species,
        desired_traits: &[String],
    ) -> Result<Vec<MatchingPet>, sqlx::Error> {
        let pets = if desired_traits.is_empty() {
            let query = format!("SELECT {COLUMNS} FROM pets WHERE species = $1 ORDER BY name, id");
            sqlx::query_as::<_, Pet>(&query)
                .bind(species.as_str())
                .fetch_all(pool)
                .await?
        } else {
            let query = format!(
                "SELECT {P_COLUMNS} FROM pets p \
                 WHERE p.species = $1 \
                   AND EXISTS ( \
                       SELECT 1 FROM pet_traits pt \
                       JOIN traits t ON t.id = pt.trait_id \
                       WHERE pt.pet_id = p.id AND t.name = ANY($2)) \
                 ORDER BY p.name, p.id"
            );
            sqlx::query_as::<_, Pet>(&query)
                .bind(species.as_str())
                .bind(desired_traits)
                .fetch_all(pool)
                .await?
        };

        let mut conn = pool.acquire().await?;
        let candidates = Self::attach_traits(&mut conn, pets).await?;

        Ok(rank_matches(candidates, species, desired_traits)
            .into_iter()
            .map(|m| MatchingPet {
                pet: m.candidate,
                matching_trait_count: m.matching_trait_count,
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a pet and attach its traits atomically.
    ///
    /// `input` must already be validated and canonicalized.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<PetDetail, PetWriteError> {
        let mut tx = pool.begin().await?;

        Self::ensure_shelter(&mut tx, input.shelter_id).await?;

        let query = format!(
            "INSERT INTO pets (name, species, breed, age, gender, description, shelter_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let pet = sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.description)
            .bind(input.shelter_id)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_traits(&mut tx, pet.id, &input.trait_ids).await?;
        let rows = Self::load_traits(&mut tx, &[pet.id]).await?;

        tx.commit().await?;
        tracing::debug!(pet_id = pet.id, traits = rows.len(), "Pet inserted");
        Ok(PetDetail::assemble(pet, &rows))
    }

    /// Apply a partial update. Returns `None` if the pet does not exist.
    ///
    /// When `trait_ids` is present the trait set is replaced in the same
    /// transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<PetDetail>, PetWriteError> {
        let mut tx = pool.begin().await?;

        if let Some(shelter_id) = input.shelter_id {
            Self::ensure_shelter(&mut tx, shelter_id).await?;
        }

        let query = format!(
            "UPDATE pets SET \
                 name = COALESCE($2, name), \
                 species = COALESCE($3, species), \
                 breed = COALESCE($4, breed), \
                 age = COALESCE($5, age), \
                 gender = COALESCE($6, gender), \
                 description = COALESCE($7, description), \
                 shelter_id = COALESCE($8, shelter_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(pet) = sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.description)
            .bind(input.shelter_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(trait_ids) = &input.trait_ids {
            Self::replace_traits(&mut tx, pet.id, trait_ids).await?;
        }
        let rows = Self::load_traits(&mut tx, &[pet.id]).await?;

        tx.commit().await?;
        Ok(Some(PetDetail::assemble(pet, &rows)))
    }

    /// Delete a pet by ID. Trait associations cascade.
    ///
    /// Returns `true` if a pet was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Trait rows for the given pets, ordered by category then name.
    pub async fn load_traits(
        conn: &mut PgConnection,
        pet_ids: &[DbId],
    ) -> Result<Vec<PetTraitRow>, sqlx::Error> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, PetTraitRow>(
            "SELECT pt.pet_id, pt.trait_id, t.name, t.category \
             FROM pet_traits pt \
             JOIN traits t ON t.id = pt.trait_id \
             WHERE pt.pet_id = ANY($1) \
             ORDER BY t.category NULLS LAST, t.name",
        )
        .bind(pet_ids)
        .fetch_all(conn)
        .await
    }

    async fn attach_traits(
        conn: &mut PgConnection,
        pets: Vec<Pet>,
    ) -> Result<Vec<PetDetail>, sqlx::Error> {
        let ids: Vec<DbId> = pets.iter().map(|p| p.id).collect();
        let rows = Self::load_traits(conn, &ids).await?;
        Ok(pets
            .into_iter()
            .map(|pet| PetDetail::assemble(pet, &rows))
            .collect())
    }

    async fn ensure_shelter(conn: &mut PgConnection, shelter_id: DbId) -> Result<(), PetWriteError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shelters WHERE id = $1)")
            .bind(shelter_id)
            .fetch_one(conn)
            .await?;
        if exists {
            Ok(())
        } else {
            Err(PetWriteError::ShelterNotFound(shelter_id))
        }
    }

    /// Replace a pet's trait set. Rejects the whole batch if any id is unknown.
    async fn replace_traits(
        conn: &mut PgConnection,
        pet_id: DbId,
        trait_ids: &[DbId],
    ) -> Result<(), PetWriteError> {
        let missing = TraitRepo::find_missing_ids(conn, trait_ids).await?;
        if !missing.is_empty() {
            return Err(PetWriteError::UnknownTraits(missing));
        }

        sqlx::query("DELETE FROM pet_traits WHERE pet_id = $1")
            .bind(pet_id)
            .execute(&mut *conn)
            .await?;

        if !trait_ids.is_empty() {
            sqlx::query(
                "INSERT INTO pet_traits (pet_id, trait_id) \
                 SELECT $1, UNNEST($2::bigint[]) \
                 ON CONFLICT (pet_id, trait_id) DO NOTHING",
            )
            .bind(pet_id)
            .bind(trait_ids)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}

/// Build a WHERE clause and bind values from a [`PetFilter`].
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty if no filters are active, or starts with `WHERE `.
fn build_pet_filter(filter: &PetFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref species) = filter.species {
        conditions.push(format!("p.species = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(species.clone()));
    }

    if let Some(ref breed) = filter.breed {
        conditions.push(format!("p.breed ILIKE ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{}%", escape_like(breed))));
    }

    if let Some(ref gender) = filter.gender {
        conditions.push(format!("p.gender = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(gender.clone()));
    }

    if let Some(shelter_id) = filter.shelter_id {
        conditions.push(format!("p.shelter_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(shelter_id));
    }

    if !filter.trait_names.is_empty() {
        conditions.push(format!(
            "p.id IN ( \
                 SELECT pt.pet_id FROM pet_traits pt \
                 JOIN traits t ON t.id = pt.trait_id \
                 WHERE t.name = ANY(${names_idx}) \
                 GROUP BY pt.pet_id \
                 HAVING COUNT(DISTINCT t.name) = ${count_idx})",
            names_idx = bind_idx,
            count_idx = bind_idx + 1,
        ));
        bind_idx += 2;
        bind_values.push(BindValue::TextArray(filter.trait_names.clone()));
        bind_values.push(BindValue::BigInt(filter.trait_names.len() as i64));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Escape `%`, `_` and `\` so user input is matched literally inside ILIKE.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

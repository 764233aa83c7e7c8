//! Repository for the `traits` catalog table.

use pawmatch_core::traits::DEFAULT_CATEGORY;
use pawmatch_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::traits::Trait;

/// Column list for `traits` queries.
const COLUMNS: &str = "id, name, category, created_at";

/// Provides catalog reads and inserts for traits.
pub struct TraitRepo;

impl TraitRepo {
    /// List traits ordered by category (uncategorized last) then name.
    ///
    /// Filtering by `"General"` also matches uncategorized traits.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Trait>, sqlx::Error> {
        match category {
            Some(category) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM traits WHERE COALESCE(category, $2) = $1 ORDER BY name"
                );
                sqlx::query_as::<_, Trait>(&query)
                    .bind(category)
                    .bind(DEFAULT_CATEGORY)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM traits ORDER BY category NULLS LAST, name");
                sqlx::query_as::<_, Trait>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a trait by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trait>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM traits WHERE id = $1");
        sqlx::query_as::<_, Trait>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new trait. A duplicate name violates `uq_traits_name`.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        category: Option<&str>,
    ) -> Result<Trait, sqlx::Error> {
        let query = format!(
            "INSERT INTO traits (name, category) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trait>(&query)
            .bind(name)
            .bind(category)
            .fetch_one(pool)
            .await
    }

    /// Return the subset of `ids` that do not exist in the catalog, in input order.
    pub async fn find_missing_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let existing: Vec<DbId> = sqlx::query_scalar("SELECT id FROM traits WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(conn)
            .await?;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }
}

//! Trait catalog models and DTOs.

use pawmatch_core::traits::DEFAULT_CATEGORY;
use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `traits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trait {
    #[serde(rename = "trait_id")]
    pub id: DbId,
    #[serde(rename = "trait_name")]
    pub name: String,
    #[serde(serialize_with = "serialize_category")]
    pub category: Option<String>,
    pub created_at: Timestamp,
}

impl Trait {
    /// Category for display, falling back to "General".
    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

fn serialize_category<S: serde::Serializer>(
    category: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.as_deref().unwrap_or(DEFAULT_CATEGORY))
}

/// DTO for adding a trait to the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrait {
    pub trait_name: String,
    pub category: Option<String>,
}

/// Query parameters for `GET /api/traits`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraitListParams {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncategorized_trait_serializes_as_general() {
        let t = Trait {
            id: 7,
            name: "Loyal".into(),
            category: None,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["trait_id"], 7);
        assert_eq!(json["trait_name"], "Loyal");
        assert_eq!(json["category"], "General");
        assert_eq!(t.display_category(), "General");
    }
}

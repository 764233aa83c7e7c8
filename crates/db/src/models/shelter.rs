//! Shelter models and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shelters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shelter {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A shelter together with the number of pets it currently houses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShelterWithPetCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub shelter: Shelter,
    pub pet_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateShelter {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShelter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

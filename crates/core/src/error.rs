//! Domain error taxonomy.
//!
//! Pure code in this crate reports failures as [`CoreError`]; the API layer
//! decides the HTTP status for each variant.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A pet, shelter, trait or quiz id that does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Rejected input: bad species, gender, age, trait name or answers.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation would break a referential rule, e.g. deleting a shelter
    /// that still houses pets.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

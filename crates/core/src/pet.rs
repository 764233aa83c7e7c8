//! Pet field validation and listing constants.

use crate::error::CoreError;
use crate::types::DbId;

/// Accepted gender values (canonical lowercase).
pub const VALID_GENDERS: &[&str] = &["male", "female", "unknown"];

/// Maximum accepted age in years.
pub const MAX_PET_AGE: i32 = 50;

/// Maximum length of a pet name.
pub const MAX_PET_NAME_LEN: usize = 100;

/// Default page size for the pet listing.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Maximum page size for the pet listing.
pub const MAX_PER_PAGE: i64 = 100;

/// Highest page number honored; larger requests are clamped to it.
pub const MAX_PAGE: i64 = 100_000;

/// Trim and validate a pet name.
pub fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_PET_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_PET_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Canonicalize a gender value. Case-insensitive on input.
pub fn canonicalize_gender(gender: &str) -> Result<String, CoreError> {
    let normalized = gender.trim().to_ascii_lowercase();
    if VALID_GENDERS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gender '{}'. Must be one of: {}",
            gender.trim(),
            VALID_GENDERS.join(", ")
        )))
    }
}

/// Validate an age in years.
pub fn validate_age(age: i32) -> Result<i32, CoreError> {
    if !(0..=MAX_PET_AGE).contains(&age) {
        return Err(CoreError::Validation(format!(
            "age must be between 0 and {MAX_PET_AGE}"
        )));
    }
    Ok(age)
}

/// Collapse duplicate trait ids, preserving first-occurrence order.
pub fn dedup_trait_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }
    unique
}

/// Clamp raw pagination parameters to `(page, per_page, offset)`.
pub fn resolve_page(page: Option<i64>, per_page: Option<i64>) -> (i64, i64, i64) {
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    (page, per_page, (page - 1) * per_page)
}

/// Number of pages needed to hold `total` items.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        0
    } else {
        (total + per_page - 1) / per_page
    }
}

//! Trait catalog helpers: name validation and category grouping.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::CoreError;

/// Display label for traits that carry no category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Maximum length of a trait name or category.
pub const MAX_TRAIT_NAME_LEN: usize = 100;

/// Traits of a single pet, keyed by category.
pub type GroupedTraits = BTreeMap<String, BTreeSet<String>>;

/// Group `(trait_name, category)` pairs by category.
///
/// Missing or blank categories fall back to [`DEFAULT_CATEGORY`]. Names are
/// deduplicated within a category.
pub fn group_by_category<'a, I>(traits: I) -> GroupedTraits
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut grouped = GroupedTraits::new();
    for (name, category) in traits {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        grouped
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string());
    }
    grouped
}

/// Trim and validate a trait name for insertion into the catalog.
pub fn normalize_trait_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("trait_name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_TRAIT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "trait_name must be at most {MAX_TRAIT_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional category. Blank categories become `None`.
pub fn normalize_category(category: Option<&str>) -> Result<Option<String>, CoreError> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        None => Ok(None),
        Some(c) if c.chars().count() > MAX_TRAIT_NAME_LEN => Err(CoreError::Validation(format!(
            "category must be at most {MAX_TRAIT_NAME_LEN} characters"
        ))),
        Some(c) => Ok(Some(c.to_string())),
    }
}

/// Parse a comma-separated trait filter (`"High Energy, Calm"`).
///
/// Empty segments are dropped; duplicates collapse, keeping first occurrence.
pub fn parse_trait_filter(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

//! Identifier and time aliases shared by every crate.

/// Primary key of shelters, pets, traits and quiz rows (`BIGSERIAL`).
pub type DbId = i64;

/// Stored and serialized in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

//! Pure domain logic for the pet-adoption marketplace.
//!
//! Nothing in this crate performs I/O. Persistence lives in `pawmatch-db`,
//! HTTP in `pawmatch-api`.

pub mod error;
pub mod matching;
pub mod pet;
pub mod quiz;
pub mod roles;
pub mod species;
pub mod traits;
pub mod types;

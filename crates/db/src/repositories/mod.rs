//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod pet_repo;
pub mod quiz_repo;
pub mod shelter_repo;
pub mod trait_repo;

pub use pet_repo::{PetRepo, PetWriteError};
pub use quiz_repo::QuizRepo;
pub use shelter_repo::ShelterRepo;
pub use trait_repo::TraitRepo;

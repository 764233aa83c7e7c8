pub mod pets;
pub mod quiz;
pub mod shelters;
pub mod traits;

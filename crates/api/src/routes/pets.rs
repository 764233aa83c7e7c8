use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Pet routes mounted at `/pets`.
///
/// ```text
/// GET    /        -> list_pets
/// POST   /        -> create_pet (shelter staff)
/// GET    /{id}    -> get_pet
/// PUT    /{id}    -> update_pet (shelter staff)
/// DELETE /{id}    -> delete_pet (shelter staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pets::list_pets).post(pets::create_pet))
        .route(
            "/{id}",
            get(pets::get_pet)
                .put(pets::update_pet)
                .delete(pets::delete_pet),
        )
}

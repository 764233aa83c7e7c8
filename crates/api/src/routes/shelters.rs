use axum::routing::get;
use axum::Router;

use crate::handlers::shelters;
use crate::state::AppState;

/// Shelter routes mounted at `/shelters`.
///
/// ```text
/// GET    /        -> list_shelters
/// POST   /        -> create_shelter (admin)
/// GET    /{id}    -> get_shelter
/// PUT    /{id}    -> update_shelter (admin)
/// DELETE /{id}    -> delete_shelter (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(shelters::list_shelters).post(shelters::create_shelter),
        )
        .route(
            "/{id}",
            get(shelters::get_shelter)
                .put(shelters::update_shelter)
                .delete(shelters::delete_shelter),
        )
}

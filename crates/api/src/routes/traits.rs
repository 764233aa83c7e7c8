use axum::routing::get;
use axum::Router;

use crate::handlers::traits;
use crate::state::AppState;

/// Trait catalog routes mounted at `/traits`.
///
/// ```text
/// GET    /        -> list_traits
/// POST   /        -> create_trait (admin)
/// GET    /{id}    -> get_trait
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(traits::list_traits).post(traits::create_trait))
        .route("/{id}", get(traits::get_trait))
}

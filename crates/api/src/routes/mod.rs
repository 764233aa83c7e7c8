pub mod health;
pub mod pets;
pub mod quiz;
pub mod shelters;
pub mod traits;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /quiz/start                       quiz definition (public)
/// /quiz/submit                      submit answers (auth)
/// /quiz/history                     caller's attempts (auth)
/// /quiz/result/{quiz_id}            stored result with matches (auth)
///
/// /pets                             list (public), create (shelter staff)
/// /pets/{id}                        get (public), update, delete (shelter staff)
///
/// /traits                           list (public), create (admin)
/// /traits/{id}                      get (public)
///
/// /shelters                         list (public), create (admin)
/// /shelters/{id}                    get (public), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/quiz", quiz::router())
        .nest("/pets", pets::router())
        .nest("/traits", traits::router())
        .nest("/shelters", shelters::router())
}

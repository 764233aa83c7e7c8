use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Quiz routes mounted at `/quiz`.
///
/// ```text
/// GET    /start                -> start_quiz
/// POST   /submit               -> submit_quiz
/// GET    /history              -> quiz_history
/// GET    /result/{quiz_id}     -> quiz_result
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", get(quiz::start_quiz))
        .route("/submit", post(quiz::submit_quiz))
        .route("/history", get(quiz::quiz_history))
        .route("/result/{quiz_id}", get(quiz::quiz_result))
}

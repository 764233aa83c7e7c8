use std::sync::Arc;

use pawmatch_core::quiz::Quiz;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, owned by the process entry point.
    pub pool: pawmatch_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Quiz definition and scoring rules, built once at startup.
    pub quiz: Arc<Quiz>,
}

//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"success": false, "error", "code"}`.
//! Server-side failures are logged and replaced by a fixed message so store
//! details never reach clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pawmatch_core::error::CoreError;
use pawmatch_db::repositories::PetWriteError;
use serde::Serialize;
use sqlx::error::ErrorKind;

const SANITIZED_MESSAGE: &str = "An internal error occurred";

/// Error type returned by every handler and extractor.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed payloads and ownership violations on the quiz endpoints.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<PetWriteError> for AppError {
    fn from(err: PetWriteError) -> Self {
        match err {
            PetWriteError::ShelterNotFound(id) => CoreError::NotFound {
                entity: "Shelter",
                id,
            }
            .into(),
            PetWriteError::UnknownTraits(_) => CoreError::Validation(err.to_string()).into(),
            PetWriteError::Database(db) => AppError::Database(db),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    code: &'static str,
}

/// Status, machine-readable code and client-facing message for one error.
struct Classified {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Classified {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal(detail: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Request failed with an internal error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", SANITIZED_MESSAGE)
    }
}

impl AppError {
    fn classify(&self) -> Classified {
        match self {
            AppError::Core(err) => classify_core(err),
            AppError::Database(err) => classify_database(err),
            AppError::BadRequest(msg) => {
                Classified::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let classified = self.classify();
        let body = ErrorBody {
            success: false,
            error: &classified.message,
            code: classified.code,
        };
        (classified.status, Json(body)).into_response()
    }
}

fn classify_core(err: &CoreError) -> Classified {
    match err {
        CoreError::NotFound { .. } => {
            Classified::new(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        CoreError::Validation(msg) => {
            Classified::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
        }
        CoreError::Conflict(msg) => Classified::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str()),
        CoreError::Unauthorized(msg) => {
            Classified::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.as_str())
        }
        CoreError::Forbidden(msg) => {
            Classified::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg.as_str())
        }
    }
}

/// `RowNotFound` is a 404. Unique violations on `uq_` constraints and
/// foreign-key violations are 409. Everything else is a sanitized 500.
fn classify_database(err: &sqlx::Error) -> Classified {
    match err {
        sqlx::Error::RowNotFound => {
            Classified::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.kind() {
                ErrorKind::UniqueViolation if constraint.starts_with("uq_") => Classified::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                ErrorKind::ForeignKeyViolation => Classified::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Record is still referenced: {constraint}"),
                ),
                _ => Classified::internal(db_err),
            }
        }
        other => Classified::internal(other),
    }
}

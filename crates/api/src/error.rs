use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use serde_json::json;

use crate::auth::error::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{success: false, ...}` error
/// envelope shared by all three services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The bearer token or its permissions were rejected.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not the expected JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A path segment did not parse (`/movies/abc`).
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// The query string did not parse (`?page=abc`).
    #[error(transparent)]
    Query(#[from] QueryRejection),

    /// No route matches the request path.
    #[error("No route for {0}")]
    UnknownRoute(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::NothingFound(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            },

            // --- Authorization ---
            AppError::Auth(err) => {
                if matches!(err, AuthError::NotConfigured) {
                    tracing::error!("Permission-gated route hit without signing keys");
                } else {
                    tracing::debug!(code = err.code(), "Request rejected by permission check");
                }
                (err.status(), err.code(), err.to_string())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::Json(rejection) => rejected(rejection.status(), rejection.body_text()),
            AppError::Path(rejection) => rejected(rejection.status(), rejection.body_text()),
            AppError::Query(rejection) => rejected(rejection.status(), rejection.body_text()),
            AppError::UnknownRoute(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "code": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Router fallback: unknown paths get the 404 envelope instead of an empty body.
pub async fn unknown_route(uri: Uri) -> AppError {
    AppError::UnknownRoute(uri.path().to_string())
}

/// Status and code for an extractor rejection. Server-side rejections (a
/// route declared with the wrong path parameters) are not echoed back.
fn rejected(status: StatusCode, body: String) -> (StatusCode, &'static str, String) {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => (status, "VALIDATION_ERROR", body),
        s if s.is_server_error() => {
            tracing::error!(error = %body, "Extractor rejected request");
            internal()
        }
        _ => (status, "BAD_REQUEST", body),
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key, not-null and check violations map to 422.
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23503") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    format!("Referenced record does not exist: {constraint}"),
                ),
                Some("23502") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    "A required field is missing".to_string(),
                ),
                Some("23514") => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                ),
                Some("23505") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    internal()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

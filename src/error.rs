use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),
    #[error("Maintenance mode is active")]
    MaintenanceModeActive,
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl AppError {
    /// 2067 = SQLite unique constraint, 23505 = PostgreSQL unique violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Database(e) => e.as_database_error().is_some_and(|db_err| {
                let code = db_err.code().unwrap_or_default();
                code == "2067" || code == "23505"
            }),
            _ => false,
        }
    }

    /// 787 = SQLite foreign key constraint, 23503 = PostgreSQL foreign key violation.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            AppError::Database(e) => e.as_database_error().is_some_and(|db_err| {
                let code = db_err.code().unwrap_or_default();
                code == "787" || code == "23503"
            }),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_unique_violation() {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "error": "Resource already exists (duplicate entry)" }))
            ).into_response();
        }

        if self.is_foreign_key_violation() {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "error": "Resource is still referenced by existing bookings" }))
            ).into_response();
        }

        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::SlotUnavailable(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::MaintenanceModeActive => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Bookings are paused for maintenance".to_string(),
            ),
            AppError::Configuration(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

//! Inventory Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Inventory-specific result type alias
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-specific error variants
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required field was missing or empty; no mutation was performed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Operation targeted a record id that does not exist
    #[error("Car record not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl InventoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::NotFound => StatusCode::NOT_FOUND,
            InventoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            InventoryError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory error");
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, status.canonical_reason().unwrap_or("Error").to_string()).into_response()
    }
}

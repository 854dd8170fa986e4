use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use bearly_sdk::BearlyError;

/// Failure half of every handler's return type: the status to answer with
/// plus a message for the `{"error": "..."}` body.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<BearlyError> for AppError {
    fn from(e: BearlyError) -> Self {
        // Every route here is a read, so a backend rejection means the
        // requested resource does not exist.
        let status = match &e {
            BearlyError::Rejected(_) => StatusCode::NOT_FOUND,
            BearlyError::Validation(_) => StatusCode::BAD_REQUEST,
            BearlyError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError::new(status, e.to_string())
    }
}

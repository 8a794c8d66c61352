//! Error Conversion
//!
//! `IntoResponse` for [`BackendError`], so handlers can return it directly.
//!
//! # Response Format
//!
//! ```json
//! {
//!   "error": "Error message",
//!   "status": 400
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into a JSON HTTP response
    ///
    /// Server-side failures are logged at `error`, client errors at `debug`.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

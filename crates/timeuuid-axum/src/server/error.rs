//! Maps generator errors onto HTTP responses.
//!
//! Client mistakes (a malformed `node` parameter) become `400 Bad Request`;
//! anything else is a `500` and is logged. Both carry a JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub type Result<T> = core::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Uuid(#[from] timeuuid::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Uuid(timeuuid::Error::InvalidNodeId { .. })
            | Self::Uuid(timeuuid::Error::InvalidText { .. }) => StatusCode::BAD_REQUEST,
            Self::Uuid(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "UUID generation failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::common::error::CatalogError;

/// JSON body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Maps the catalog error taxonomy onto HTTP status codes. Messages name
/// the offending edition or entry, never a filesystem path.
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            CatalogError::EditionNotFound(_) => (StatusCode::NOT_FOUND, "edition_not_found"),
            CatalogError::EntryNotFound { .. } => (StatusCode::NOT_FOUND, "entry_not_found"),
            CatalogError::InvalidEntryName(_) => (StatusCode::BAD_REQUEST, "invalid_entry_name"),
            CatalogError::MalformedRecord { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_record")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorBody {
            error: kind.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

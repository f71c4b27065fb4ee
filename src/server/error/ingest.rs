use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Batch-level manifest failures. No passengers are created when one of these occurs.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Manifest header is missing required column(s): {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<&'static str> },
    #[error("Manifest could not be read: {0}")]
    Unreadable(#[from] csv::Error),
}

/// Reason a single manifest row was left out of an otherwise valid ingest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowSkipped {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("malformed row: {0}")]
    Malformed(String),
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected manifest: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

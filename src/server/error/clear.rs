use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Clear was aborted. The transaction is rolled back, so the tracker keeps its prior state.
#[derive(Error, Debug)]
pub enum ClearError {
    #[error("Failed to start clearing tracker data: {0}")]
    Unavailable(#[source] sea_orm::DbErr),
    #[error("Clearing tracker data failed at {stage}: {source}")]
    PartialFailure {
        stage: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for ClearError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Write referenced a passenger that does not exist (or was cleared).
    #[error("Passenger {0} does not exist")]
    UnknownPassenger(i32),
    /// Underlying storage failed; nothing from the aborted operation was committed.
    #[error("Tracker storage unavailable: {0}")]
    Unavailable(#[from] sea_orm::DbErr),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownPassenger(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Unavailable(err) => {
                tracing::error!("Tracker storage unavailable: {}", err);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Tracker storage unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

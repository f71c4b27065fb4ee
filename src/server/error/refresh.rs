use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("A flight status refresh is already in progress")]
    AlreadyRunning,
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

//! Error types for the Skyward server application.
//!
//! Each domain (configuration, manifest ingest, tracker storage, clearing, the status
//! provider and the refresh cycle) has its own `thiserror` enum. They are aggregated into
//! [`Error`] so the `?` operator works across layers, and every error implements
//! `IntoResponse` so controllers can return them directly.

pub mod clear;
pub mod config;
pub mod ingest;
pub mod provider;
pub mod refresh;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        clear::ClearError, config::ConfigError, ingest::IngestError, provider::ProviderError,
        refresh::RefreshError, store::StoreError,
    },
};

/// Main error type for the Skyward server application.
///
/// Per-row ingest problems and per-passenger provider failures never reach this type; they
/// are collected into the ingest and refresh reports. Only batch-level and storage-level
/// failures propagate as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Manifest could not be ingested as a batch.
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Tracker storage rejected a write or could not be reached.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Clearing the tracker was aborted.
    #[error(transparent)]
    ClearError(#[from] ClearError),
    /// Status provider could not be constructed or queried.
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Refresh cycle could not run.
    #[error(transparent)]
    RefreshError(#[from] RefreshError),
    /// Database error outside of the tracker store (connection, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup or shutdown).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// A spawned task panicked or was cancelled.
    #[error(transparent)]
    TaskError(#[from] tokio::task::JoinError),
    /// I/O error while binding the listener or reading a manifest file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Manifest header mismatch or unreadable manifest
/// - 404 Not Found - Observation appended for a passenger that does not exist
/// - 409 Conflict - Refresh requested while another refresh is running
/// - 503 Service Unavailable - Tracker storage unreachable
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::IngestError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
            Self::RefreshError(err) => err.into_response(),
            Self::ClearError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

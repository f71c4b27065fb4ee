use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        report::{ClearReport, IngestReport},
    },
    server::{error::Error, model::app::AppState, service::manifest::ManifestService},
};

pub static PASSENGER_TAG: &str = "passenger";

/// Name recorded for uploads that do not give one.
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.csv";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UploadParams {
    /// File name recorded in the upload history
    pub file_name: Option<String>,
}

/// Upload a passenger manifest
///
/// Accepts a CSV manifest with the header `name, airline, flight_number, departure_airport,
/// arrival_airport, departure_date`. Rows with missing values are skipped and reported; a
/// header lacking a required column rejects the whole upload. Every upload, accepted or
/// rejected, is added to the upload history under `fileName`.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = PASSENGER_TAG,
    params(UploadParams),
    request_body(content = String, content_type = "text/csv", description = "CSV passenger manifest"),
    responses(
        (status = 200, description = "Success when the manifest is ingested", body = IngestReport),
        (status = 400, description = "Manifest header is missing columns or the file is unreadable", body = ErrorDto),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_manifest(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let manifest_service = ManifestService::new(&state.store);
    let file_name = params
        .file_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());

    let report = manifest_service.ingest(&file_name, &body[..]).await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Remove all passengers and observations
///
/// Unconditional; the response lists how many rows were removed.
#[utoipa::path(
    post,
    path = "/api/passengers/clear",
    tag = PASSENGER_TAG,
    responses(
        (status = 200, description = "Success when all tracker data is removed", body = ClearReport),
        (status = 500, description = "Clearing failed and was rolled back", body = ErrorDto)
    ),
)]
pub async fn clear_passengers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let report = state.store.clear_all().await?;

    Ok((StatusCode::OK, Json(report)))
}

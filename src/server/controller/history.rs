use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        history::{AlertDto, BatchDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{alert::AlertService, manifest::ManifestService},
    },
};

pub static HISTORY_TAG: &str = "history";

/// Recent flight alerts
///
/// Lists the last 100 delay and cancellation alerts, newest first. Alerts are kept when the
/// tracker is cleared.
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Success when listing recent alerts", body = Vec<AlertDto>),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let alert_service = AlertService::new(&state.store);

    let alerts = alert_service.recent().await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// Recent manifest uploads
///
/// Lists the last 100 uploads, newest first, including rejected ones.
#[utoipa::path(
    get,
    path = "/api/batches",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Success when listing recent uploads", body = Vec<BatchDto>),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let manifest_service = ManifestService::new(&state.store);

    let batches = manifest_service.recent_batches().await?;

    Ok((StatusCode::OK, Json(batches)))
}

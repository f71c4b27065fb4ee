use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{FlightDto, StatusSummary},
        report::RefreshReport,
    },
    server::{error::Error, model::app::AppState, service::view::FlightViewService},
};

pub static FLIGHT_TAG: &str = "flight";

/// Current flight view
///
/// Lists every tracked passenger with the latest known status of their flight, ordered by
/// passenger ID. Passengers without observations are reported as `unknown`.
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Success when resolving the current flight view", body = Vec<FlightDto>),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flights(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let view_service = FlightViewService::new(&state.store);

    let flights: Vec<FlightDto> = view_service
        .current_view()
        .await?
        .into_iter()
        .map(FlightDto::from)
        .collect();

    Ok((StatusCode::OK, Json(flights)))
}

/// Flight counts by status and by airline
#[utoipa::path(
    get,
    path = "/api/flights/summary",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Success when summarizing the current flight view", body = StatusSummary),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let view_service = FlightViewService::new(&state.store);

    let summary = view_service.summary().await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Latest flight status for a single passenger
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Passenger ID")
    ),
    responses(
        (status = 200, description = "Success when resolving the passenger's flight", body = FlightDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(passenger_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let view_service = FlightViewService::new(&state.store);

    let Some(view) = view_service.flight(passenger_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Passenger not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(FlightDto::from(view))).into_response())
}

/// Run one refresh cycle now
///
/// Queries the status provider for every passenger outside the regular schedule. Per-passenger
/// provider failures are listed in the report and do not fail the request. The cycle runs on
/// its own task, so it completes even if the client disconnects.
#[utoipa::path(
    post,
    path = "/api/flights/refresh",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Success when the refresh cycle completes", body = RefreshReport),
        (status = 409, description = "A refresh is already in progress", body = ErrorDto),
        (status = 503, description = "Tracker storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_flights(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let scheduler = state.scheduler.clone();
    let report = tokio::spawn(async move { scheduler.run_now().await }).await??;

    Ok((StatusCode::OK, Json(report)))
}

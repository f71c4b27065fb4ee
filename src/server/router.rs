//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa path annotation. Swagger UI
//! serves the collected OpenAPI document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/flights` - Current flight view
/// - `GET /api/flights/summary` - Flight counts by status and airline
/// - `GET /api/flights/{id}` - Flight view for one passenger
/// - `POST /api/flights/refresh` - Run one refresh cycle now
/// - `POST /api/upload` - Ingest a CSV passenger manifest
/// - `POST /api/passengers/clear` - Remove all tracker data
/// - `GET /api/alerts` - Recent delay and cancellation alerts
/// - `GET /api/batches` - Recent manifest uploads
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { store, scheduler };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Skyward", description = "Skyward API"), tags(
        (name = controller::flight::FLIGHT_TAG, description = "Flight status API routes"),
        (name = controller::passenger::PASSENGER_TAG, description = "Passenger manifest API routes"),
        (name = controller::history::HISTORY_TAG, description = "Alert and upload history API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::flight::get_flights))
        .routes(routes!(controller::flight::get_summary))
        .routes(routes!(controller::flight::get_flight))
        .routes(routes!(controller::flight::refresh_flights))
        .routes(routes!(controller::passenger::upload_manifest))
        .routes(routes!(controller::passenger::clear_passengers))
        .routes(routes!(controller::history::get_alerts))
        .routes(routes!(controller::history::get_batches))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

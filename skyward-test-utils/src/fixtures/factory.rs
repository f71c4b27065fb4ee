//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests of pure resolution logic.

use chrono::{NaiveDateTime, Utc};

use crate::{
    constant::{TEST_AIRLINE, TEST_DEPARTURE_DATE},
    model::{PassengerModel, StatusObservationModel},
};

/// Flight number given to the mock passenger with the provided ID.
pub fn mock_flight_number(passenger_id: i32) -> String {
    (100 + passenger_id).to_string()
}

/// Create a mock passenger model.
///
/// # Arguments
/// - `id` - Passenger ID, also used to derive the name and flight number
pub fn mock_passenger_model(id: i32) -> PassengerModel {
    PassengerModel {
        id,
        name: format!("Passenger {}", id),
        airline: TEST_AIRLINE.to_string(),
        flight_number: mock_flight_number(id),
        departure_airport: "LHR".to_string(),
        arrival_airport: "JFK".to_string(),
        departure_date: TEST_DEPARTURE_DATE.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock observation model without telemetry.
///
/// # Arguments
/// - `id` - Observation ID, orders observations sharing the same timestamp
/// - `passenger_id` - Observed passenger
/// - `status` - Stored status string
/// - `observed_at` - Observation timestamp
pub fn mock_status_model(
    id: i32,
    passenger_id: i32,
    status: &str,
    observed_at: NaiveDateTime,
) -> StatusObservationModel {
    StatusObservationModel {
        id,
        passenger_id,
        status: status.to_string(),
        latitude: None,
        longitude: None,
        altitude: None,
        velocity: None,
        heading: None,
        observed_at,
    }
}

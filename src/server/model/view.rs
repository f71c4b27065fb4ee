//! Resolved per-passenger flight view.

use crate::{
    model::flight::{FlightDto, FlightState},
    server::model::db::{PassengerModel, StatusObservationModel},
};

/// A passenger paired with their latest known observation, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightView {
    pub passenger: PassengerModel,
    pub latest: Option<StatusObservationModel>,
}

impl FlightView {
    /// Current state of the flight.
    ///
    /// Passengers without any observation, or whose stored status no longer parses,
    /// resolve to [`FlightState::Unknown`].
    pub fn status(&self) -> FlightState {
        self.latest
            .as_ref()
            .and_then(|observation| observation.status.parse().ok())
            .unwrap_or(FlightState::Unknown)
    }
}

impl From<FlightView> for FlightDto {
    fn from(view: FlightView) -> Self {
        let status = view.status();
        let FlightView { passenger, latest } = view;

        let mut dto = FlightDto {
            id: passenger.id,
            passenger_name: passenger.name,
            airline: passenger.airline,
            flight_number: passenger.flight_number,
            departure_airport: passenger.departure_airport,
            arrival_airport: passenger.arrival_airport,
            departure_date: passenger.departure_date,
            status,
            latitude: None,
            longitude: None,
            altitude: None,
            velocity: None,
            heading: None,
            observed_at: None,
        };

        if let Some(observation) = latest {
            dto.latitude = observation.latitude;
            dto.longitude = observation.longitude;
            dto.altitude = observation.altitude;
            dto.velocity = observation.velocity;
            dto.heading = observation.heading;
            dto.observed_at = Some(observation.observed_at);
        }

        dto
    }
}

//! Delay and cancellation alerts.
//!
//! An alert is raised once per transition: when a passenger's latest observation changes to
//! delayed or cancelled from any other state, including having no observation at all. A
//! flight that stays delayed across refreshes raises nothing further until it leaves that
//! state and enters it again.


use crate::{
    model::{flight::FlightState, history::AlertDto},
    server::{
        error::store::StoreError,
        model::{
            db::{FlightAlertModel, PassengerModel, StatusObservationModel},
            history::NewAlert,
        },
        store::{TrackerStore, HISTORY_LIMIT},
    },
};

fn state_of(observation: &StatusObservationModel) -> FlightState {
    observation.status.parse().unwrap_or(FlightState::Unknown)
}

/// State to alert on when the latest observation moved from `previous` to `latest`.
///
/// Returns `None` when the latest observation did not change, or when the new state is
/// neither delayed nor cancelled, or when it equals the previous state.
pub fn alert_state(
    previous: Option<&StatusObservationModel>,
    latest: Option<&StatusObservationModel>,
) -> Option<FlightState> {
    let latest = latest?;
    if previous.is_some_and(|previous| previous.id == latest.id) {
        return None;
    }

    let state = state_of(latest);
    if !matches!(state, FlightState::Delayed | FlightState::Cancelled) {
        return None;
    }

    match previous {
        Some(previous) if state_of(previous) == state => None,
        _ => Some(state),
    }
}

/// Message addressed to the passenger for an alerting state.
pub fn alert_message(passenger: &PassengerModel, state: FlightState) -> String {
    let flight = format!("{}{}", passenger.airline, passenger.flight_number);

    match state {
        FlightState::Cancelled => format!(
            "Flight Alert: Your flight {} from {} to {} scheduled for {} has been cancelled. \
             Please contact your airline for rebooking options.",
            flight, passenger.departure_airport, passenger.arrival_airport, passenger.departure_date
        ),
        _ => format!(
            "Flight Update: Your flight {} from {} to {} on {} is {}.",
            flight,
            passenger.departure_airport,
            passenger.arrival_airport,
            passenger.departure_date,
            state
        ),
    }
}

/// Raises and lists flight alerts.
pub struct AlertService<'a> {
    store: &'a TrackerStore,
}

impl<'a> AlertService<'a> {
    /// Creates a new instance of [`AlertService`].
    pub fn new(store: &'a TrackerStore) -> Self {
        Self { store }
    }

    /// Records and logs an alert if the passenger's latest observation turned delayed or
    /// cancelled.
    ///
    /// # Returns
    /// - `Ok(Some(FlightAlertModel))` - The alert that was raised
    /// - `Ok(None)` - No transition into an alerting state
    /// - `Err(StoreError::Unavailable)` - The alert could not be recorded
    pub async fn notify(
        &self,
        passenger: &PassengerModel,
        previous: Option<&StatusObservationModel>,
        latest: Option<&StatusObservationModel>,
    ) -> Result<Option<FlightAlertModel>, StoreError> {
        let Some(state) = alert_state(previous, latest) else {
            return Ok(None);
        };

        let message = alert_message(passenger, state);
        tracing::warn!("Flight alert for passenger {}: {}", passenger.id, message);

        let alert = self
            .store
            .record_alert(NewAlert {
                passenger_id: passenger.id,
                passenger_name: passenger.name.clone(),
                airline: passenger.airline.clone(),
                flight_number: passenger.flight_number.clone(),
                status: state,
                message,
            })
            .await?;

        Ok(Some(alert))
    }

    /// Most recent alerts, newest first.
    pub async fn recent(&self) -> Result<Vec<AlertDto>, StoreError> {
        let alerts = self.store.alerts(HISTORY_LIMIT).await?;

        Ok(alerts.into_iter().map(AlertDto::from).collect())
    }
}

//! Read-side resolution of the current flight view.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::flight::StatusSummary,
    server::{
        error::store::StoreError,
        model::{
            db::{PassengerModel, StatusObservationModel},
            view::FlightView,
        },
        store::{TrackerSnapshot, TrackerStore},
    },
};

/// Pairs every passenger with its latest observation, ordered by passenger ID.
///
/// Passengers missing from `latest` get no observation and resolve to an unknown status.
pub fn resolve(
    mut passengers: Vec<PassengerModel>,
    latest: &HashMap<i32, StatusObservationModel>,
) -> Vec<FlightView> {
    passengers.sort_by_key(|passenger| passenger.id);

    passengers
        .into_iter()
        .map(|passenger| FlightView {
            latest: latest.get(&passenger.id).cloned(),
            passenger,
        })
        .collect()
}

/// Counts flights by current status and by airline.
pub fn summarize(views: &[FlightView]) -> StatusSummary {
    let mut by_status = BTreeMap::new();
    let mut by_airline = BTreeMap::new();

    for view in views {
        *by_status.entry(view.status()).or_insert(0) += 1;
        *by_airline
            .entry(view.passenger.airline.clone())
            .or_insert(0) += 1;
    }

    StatusSummary {
        total: views.len(),
        by_status,
        by_airline,
    }
}

pub struct FlightViewService<'a> {
    store: &'a TrackerStore,
}

impl<'a> FlightViewService<'a> {
    /// Creates a new instance of [`FlightViewService`].
    pub fn new(store: &'a TrackerStore) -> Self {
        Self { store }
    }

    /// One row per passenger with their latest known status.
    pub async fn current_view(&self) -> Result<Vec<FlightView>, StoreError> {
        let TrackerSnapshot { passengers, latest } = self.store.snapshot().await?;

        Ok(resolve(passengers, &latest))
    }

    /// The view row for a single passenger, or `None` if no such passenger exists.
    pub async fn flight(&self, passenger_id: i32) -> Result<Option<FlightView>, StoreError> {
        let Some(passenger) = self.store.passenger(passenger_id).await? else {
            return Ok(None);
        };

        Ok(Some(FlightView {
            latest: self.store.latest_for(passenger_id),
            passenger,
        }))
    }

    pub async fn summary(&self) -> Result<StatusSummary, StoreError> {
        Ok(summarize(&self.current_view().await?))
    }
}

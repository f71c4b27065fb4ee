use std::collections::HashMap;

use sea_orm::TransactionTrait;

use crate::server::{
    data::{flight_status::FlightStatusRepository, passenger::PassengerRepository},
    error::store::StoreError,
    model::{db::StatusObservationModel, observation::Observation},
    store::TrackerStore,
};

impl TrackerStore {
    /// Appends an observation for a passenger.
    ///
    /// The passenger's existence is checked inside the same transaction as the insert, and
    /// the writer lock excludes a concurrent clear, so an observation is never stored for a
    /// passenger that no longer exists.
    ///
    /// # Returns
    /// - `Ok(StatusObservationModel)` - The stored observation
    /// - `Err(StoreError::UnknownPassenger)` - No passenger with that ID exists
    /// - `Err(StoreError::Unavailable)` - Storage failed, nothing was written
    pub async fn append(
        &self,
        passenger_id: i32,
        observation: Observation,
    ) -> Result<StatusObservationModel, StoreError> {
        let _writer = self.inner.writer.lock().await;

        let txn = self.inner.db.begin().await?;
        if !PassengerRepository::new(&txn).exists(passenger_id).await? {
            return Err(StoreError::UnknownPassenger(passenger_id));
        }

        let stored = FlightStatusRepository::new(&txn)
            .create(passenger_id, observation)
            .await?;
        txn.commit().await?;

        let became_latest = self.inner.index.write().record(stored.clone());
        if !became_latest {
            tracing::debug!(
                "Observation {} for passenger {} is older than the current latest",
                stored.id,
                passenger_id
            );
        }

        Ok(stored)
    }

    /// Latest observation for a single passenger.
    pub fn latest_for(&self, passenger_id: i32) -> Option<StatusObservationModel> {
        self.inner.index.read().get(passenger_id).cloned()
    }

    /// Latest observation for every passenger that has one.
    ///
    /// Passengers without observations are absent from the mapping.
    pub fn latest_for_all(&self) -> HashMap<i32, StatusObservationModel> {
        self.inner.index.read().snapshot()
    }
}

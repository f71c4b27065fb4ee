use sea_orm::TransactionTrait;

use crate::{
    model::report::ClearReport,
    server::{
        data::{flight_status::FlightStatusRepository, passenger::PassengerRepository},
        error::clear::ClearError,
        store::TrackerStore,
    },
};

impl TrackerStore {
    /// Removes every observation and then every passenger in a single transaction.
    ///
    /// Holds the writer lock for the whole operation so no ingest or append interleaves.
    /// On failure the transaction rolls back and the index is left untouched. Clearing an
    /// empty store succeeds with zero counts.
    pub async fn clear_all(&self) -> Result<ClearReport, ClearError> {
        let _writer = self.inner.writer.lock().await;

        let txn = self.inner.db.begin().await.map_err(ClearError::Unavailable)?;

        let observations = FlightStatusRepository::new(&txn)
            .delete_all()
            .await
            .map_err(|source| ClearError::PartialFailure {
                stage: "observations",
                source,
            })?;
        let passengers = PassengerRepository::new(&txn)
            .delete_all()
            .await
            .map_err(|source| ClearError::PartialFailure {
                stage: "passengers",
                source,
            })?;

        txn.commit()
            .await
            .map_err(|source| ClearError::PartialFailure {
                stage: "commit",
                source,
            })?;

        self.inner.index.write().clear();

        let report = ClearReport {
            observations_removed: observations.rows_affected,
            passengers_removed: passengers.rows_affected,
        };

        tracing::warn!(
            "Cleared tracker: removed {} passenger(s) and {} observation(s)",
            report.passengers_removed,
            report.observations_removed
        );

        Ok(report)
    }
}

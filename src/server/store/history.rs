use crate::server::{
    data::{flight_alert::FlightAlertRepository, upload_batch::UploadBatchRepository},
    error::store::StoreError,
    model::{
        db::{FlightAlertModel, UploadBatchModel},
        history::{NewAlert, NewBatch},
    },
    store::TrackerStore,
};

/// Entries returned by the history reads.
pub const HISTORY_LIMIT: u64 = 100;

impl TrackerStore {
    /// Records an upload that stored no passengers, such as a rejected manifest.
    ///
    /// Successful uploads are recorded by [`TrackerStore::insert_passengers`].
    pub async fn record_batch(&self, batch: NewBatch) -> Result<UploadBatchModel, StoreError> {
        let _writer = self.inner.writer.lock().await;

        Ok(UploadBatchRepository::new(&self.inner.db)
            .create(batch)
            .await?)
    }

    /// Most recent uploads, newest first.
    pub async fn batches(&self, limit: u64) -> Result<Vec<UploadBatchModel>, StoreError> {
        Ok(UploadBatchRepository::new(&self.inner.db)
            .get_recent(limit)
            .await?)
    }

    /// Records an alert. Alerts are kept across a clear.
    pub async fn record_alert(&self, alert: NewAlert) -> Result<FlightAlertModel, StoreError> {
        let _writer = self.inner.writer.lock().await;

        Ok(FlightAlertRepository::new(&self.inner.db)
            .create(alert)
            .await?)
    }

    /// Most recent alerts, newest first.
    pub async fn alerts(&self, limit: u64) -> Result<Vec<FlightAlertModel>, StoreError> {
        Ok(FlightAlertRepository::new(&self.inner.db)
            .get_recent(limit)
            .await?)
    }
}

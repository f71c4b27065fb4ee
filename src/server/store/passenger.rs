use sea_orm::TransactionTrait;

use crate::server::{
    data::{passenger::PassengerRepository, upload_batch::UploadBatchRepository},
    error::store::StoreError,
    model::{
        db::{PassengerModel, UploadBatchModel},
        history::NewBatch,
        manifest::NewPassenger,
    },
    store::TrackerStore,
};

/// Passengers stored from one manifest and the upload batch recorded alongside them.
#[derive(Debug, Clone)]
pub struct StoredManifest {
    pub batch: UploadBatchModel,
    pub passengers: Vec<PassengerModel>,
}

impl TrackerStore {
    /// Stores the passengers of one manifest in a single transaction.
    ///
    /// A completed upload batch counting the stored and skipped rows is recorded in the same
    /// transaction. Either every passenger and the batch are stored or nothing is. An empty
    /// manifest still records its batch.
    pub async fn insert_passengers(
        &self,
        file_name: &str,
        skipped: usize,
        passengers: Vec<NewPassenger>,
    ) -> Result<StoredManifest, StoreError> {
        let _writer = self.inner.writer.lock().await;

        let txn = self.inner.db.begin().await?;
        let created = PassengerRepository::new(&txn).create_many(passengers).await?;
        let batch = UploadBatchRepository::new(&txn)
            .create(NewBatch::completed(file_name, created.len(), skipped))
            .await?;
        txn.commit().await?;

        Ok(StoredManifest {
            batch,
            passengers: created,
        })
    }

    /// All passengers ordered by ID.
    pub async fn passengers(&self) -> Result<Vec<PassengerModel>, StoreError> {
        Ok(PassengerRepository::new(&self.inner.db).get_all().await?)
    }

    pub async fn passenger(&self, passenger_id: i32) -> Result<Option<PassengerModel>, StoreError> {
        Ok(PassengerRepository::new(&self.inner.db)
            .get_by_id(passenger_id)
            .await?)
    }
}

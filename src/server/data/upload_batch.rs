use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::{db::UploadBatchModel, history::NewBatch};

pub struct UploadBatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UploadBatchRepository<'a, C> {
    /// Creates a new instance of [`UploadBatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a manifest upload stamped with the current time
    pub async fn create(&self, batch: NewBatch) -> Result<UploadBatchModel, DbErr> {
        let batch = entity::upload_batch::ActiveModel {
            file_name: ActiveValue::Set(batch.file_name),
            status: ActiveValue::Set(batch.status.as_str().to_string()),
            ingested: ActiveValue::Set(batch.ingested as i32),
            skipped: ActiveValue::Set(batch.skipped as i32),
            error: ActiveValue::Set(batch.error),
            uploaded_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        batch.insert(self.db).await
    }

    /// Returns up to `limit` uploads, newest first
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<UploadBatchModel>, DbErr> {
        entity::prelude::UploadBatch::find()
            .order_by_desc(entity::upload_batch::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

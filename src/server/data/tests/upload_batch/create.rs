use super::*;

/// Expect a completed batch stored with its counts and no error
#[tokio::test]
async fn records_completed_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let batch_repo = UploadBatchRepository::new(&test.db);
    let batch = batch_repo
        .create(NewBatch::completed("manifest.csv", 4, 1))
        .await?;

    assert_eq!(batch.file_name, "manifest.csv");
    assert_eq!(batch.status, BatchStatus::Completed.as_str());
    assert_eq!(batch.ingested, 4);
    assert_eq!(batch.skipped, 1);
    assert!(batch.error.is_none());

    Ok(())
}

/// Expect a failed batch to keep the rejection reason
#[tokio::test]
async fn records_failed_batch_with_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let batch_repo = UploadBatchRepository::new(&test.db);
    let batch = batch_repo
        .create(NewBatch::failed("broken.csv", "missing airline".to_string()))
        .await?;

    assert_eq!(batch.status, BatchStatus::Failed.as_str());
    assert_eq!(batch.ingested, 0);
    assert_eq!(batch.error.as_deref(), Some("missing airline"));

    Ok(())
}

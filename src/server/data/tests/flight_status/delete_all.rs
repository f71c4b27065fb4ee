use super::*;

/// Expect every observation removed and counted
#[tokio::test]
async fn deletes_all_observations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    test.flight_status().insert_mock_status(1, "landed", now).await?;
    test.flight_status().insert_mock_status(2, "delayed", now).await?;

    let status_repo = FlightStatusRepository::new(&test.db);
    let result = status_repo.delete_all().await?;

    assert_eq!(result.rows_affected, 2);
    let remaining = entity::prelude::FlightStatus::find().all(&test.db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

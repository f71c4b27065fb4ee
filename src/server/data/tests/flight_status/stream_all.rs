use super::*;

/// Expect every observation yielded once, in ID order
#[tokio::test]
async fn streams_observations_in_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    let first = test.flight_status().insert_mock_status(1, "landed", now).await?;
    let second = test
        .flight_status()
        .insert_mock_status(2, "delayed", now - Duration::hours(1))
        .await?;
    let third = test.flight_status().insert_mock_status(1, "in-air", now).await?;

    let status_repo = FlightStatusRepository::new(&test.db);
    let streamed: Vec<_> = status_repo.stream_all().await?.try_collect().await?;

    assert_eq!(streamed, vec![first, second, third]);

    Ok(())
}

/// Expect an empty stream when nothing is stored
#[tokio::test]
async fn streams_nothing_without_observations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let status_repo = FlightStatusRepository::new(&test.db);
    let streamed: Vec<_> = status_repo.stream_all().await?.try_collect().await?;

    assert!(streamed.is_empty());

    Ok(())
}

use super::*;

/// Expect true for a stored passenger and false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .build()
        .await?;

    let passenger_repo = PassengerRepository::new(&test.db);

    assert!(passenger_repo.exists(1).await?);
    assert!(!passenger_repo.exists(2).await?);

    Ok(())
}

/// Expect false once every passenger is deleted
#[tokio::test]
async fn returns_false_after_delete_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .build()
        .await?;

    let passenger_repo = PassengerRepository::new(&test.db);
    let result = passenger_repo.delete_all().await?;

    assert_eq!(result.rows_affected, 1);
    assert!(!passenger_repo.exists(1).await?);
    assert!(passenger_repo.get_by_id(1).await?.is_none());

    Ok(())
}

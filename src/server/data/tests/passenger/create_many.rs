use super::*;

/// Expect all passengers returned with assigned IDs
#[tokio::test]
async fn creates_passengers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let passenger_repo = PassengerRepository::new(&test.db);
    let result = passenger_repo
        .create_many(vec![new_passenger("Ada", "101"), new_passenger("Grace", "102")])
        .await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].flight_number, "102");
    assert_ne!(created[0].id, created[1].id);

    Ok(())
}

/// Expect Ok with no rows and no query for an empty batch
#[tokio::test]
async fn returns_empty_for_empty_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let passenger_repo = PassengerRepository::new(&test.db);
    let result = passenger_repo.create_many(Vec::new()).await;

    assert!(matches!(result, Ok(ref created) if created.is_empty()));

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let passenger_repo = PassengerRepository::new(&test.db);
    let result = passenger_repo
        .create_many(vec![new_passenger("Ada", "101")])
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Expect telemetry stored as given and the status in its kebab-case form
#[tokio::test]
async fn creates_observation_with_telemetry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .build()
        .await?;

    let status_repo = FlightStatusRepository::new(&test.db);
    let observed_at = Utc::now().naive_utc() - Duration::minutes(3);
    let created = status_repo
        .create(
            1,
            Observation {
                status: FlightState::InAir,
                latitude: Some(40.64),
                longitude: Some(-73.78),
                altitude: Some(3_000.0),
                velocity: Some(150.0),
                heading: None,
                observed_at: Some(observed_at),
            },
        )
        .await?;

    assert_eq!(created.status, "in-air");
    assert_eq!(created.latitude, Some(40.64));
    assert_eq!(created.heading, None);
    assert_eq!(created.observed_at, observed_at);

    Ok(())
}

/// Expect the current time to be used when no timestamp is given
#[tokio::test]
async fn defaults_observed_at_to_now() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .build()
        .await?;

    let before = Utc::now().naive_utc();
    let status_repo = FlightStatusRepository::new(&test.db);
    let created = status_repo
        .create(1, Observation::status_only(FlightState::Scheduled))
        .await?;
    let after = Utc::now().naive_utc();

    assert!(created.observed_at >= before - Duration::seconds(1));
    assert!(created.observed_at <= after + Duration::seconds(1));

    Ok(())
}

/// Expect Error when the passenger does not exist
#[tokio::test]
async fn fails_for_nonexistent_passenger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let status_repo = FlightStatusRepository::new(&test.db);
    let result = status_repo
        .create(1, Observation::status_only(FlightState::Landed))
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Expect the newest alerts first, capped at the limit
#[tokio::test]
async fn returns_newest_first_up_to_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let alert_repo = FlightAlertRepository::new(&test.db);
    for passenger_id in 1..=3 {
        alert_repo
            .create(new_alert(passenger_id, FlightState::Delayed))
            .await?;
    }

    let alerts = alert_repo.get_recent(2).await?;

    let ids: Vec<i32> = alerts.iter().map(|a| a.passenger_id).collect();
    assert_eq!(ids, vec![3, 2]);

    Ok(())
}

/// Expect an empty list without alerts
#[tokio::test]
async fn returns_empty_without_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let alerts = FlightAlertRepository::new(&test.db).get_recent(10).await?;

    assert!(alerts.is_empty());

    Ok(())
}

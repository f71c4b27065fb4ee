use super::*;

/// Expect the alert stored with its status in kebab-case form
#[tokio::test]
async fn records_alert() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let alert_repo = FlightAlertRepository::new(&test.db);
    let alert = alert_repo.create(new_alert(1, FlightState::Cancelled)).await?;

    assert_eq!(alert.passenger_id, 1);
    assert_eq!(alert.passenger_name, "Passenger 1");
    assert_eq!(alert.status, "cancelled");
    assert_eq!(alert.message, "Flight SKY101 is cancelled");

    Ok(())
}

/// Expect an alert to be stored for a passenger ID that has no passenger row
#[tokio::test]
async fn records_alert_without_passenger_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let alert_repo = FlightAlertRepository::new(&test.db);
    let result = alert_repo.create(new_alert(42, FlightState::Delayed)).await;

    assert!(result.is_ok());

    Ok(())
}

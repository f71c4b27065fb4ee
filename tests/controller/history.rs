use serde_json::json;
use skyward::{
    model::{
        flight::FlightState,
        history::{AlertDto, BatchDto, BatchStatus},
    },
    server::{
        controller::history::{get_alerts, get_batches},
        model::history::NewBatch,
    },
};

use super::*;

/// Expect an alert listed after a refresh finds a cancelled flight
#[tokio::test]
async fn lists_alerts_raised_by_refresh() -> Result<(), TestError> {
    let airline = skyward_test_utils::constant::TEST_AIRLINE;
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_status_endpoint(airline, "101", json!({ "status": "cancelled" }), 1)
        .build()
        .await?;
    let state = test.app_state().await;
    state.scheduler.run_now().await.unwrap();

    let resp = get_alerts(State(state.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let alerts: Vec<AlertDto> = read_json(resp).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].passenger_id, 1);
    assert_eq!(alerts[0].passenger_name, "Passenger 1");
    assert_eq!(alerts[0].status, FlightState::Cancelled);
    assert!(alerts[0].message.contains("cancelled"));
    test.assert_mocks();

    Ok(())
}

/// Expect an empty list before any alert is raised
#[tokio::test]
async fn lists_no_alerts_initially() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = get_alerts(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    let alerts: Vec<AlertDto> = read_json(resp).await;
    assert!(alerts.is_empty());

    Ok(())
}

/// Expect uploads listed newest first with their outcome
#[tokio::test]
async fn lists_recent_batches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let state = test.app_state().await;
    state
        .store
        .record_batch(NewBatch::completed("monday.csv", 12, 0))
        .await
        .unwrap();
    state
        .store
        .record_batch(NewBatch::failed("tuesday.csv", "unreadable".to_string()))
        .await
        .unwrap();

    let resp = get_batches(State(state.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let batches: Vec<BatchDto> = read_json(resp).await;
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].file_name, "tuesday.csv");
    assert_eq!(batches[0].status, BatchStatus::Failed);
    assert_eq!(batches[0].error.as_deref(), Some("unreadable"));
    assert_eq!(batches[1].file_name, "monday.csv");
    assert_eq!(batches[1].status, BatchStatus::Completed);
    assert_eq!(batches[1].ingested, 12);

    Ok(())
}

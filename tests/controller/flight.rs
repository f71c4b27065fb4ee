use axum::extract::Path;
use serde_json::json;
use skyward::{
    model::{
        api::ErrorDto,
        flight::{FlightDto, FlightState, StatusSummary},
        report::RefreshReport,
    },
    server::controller::flight::{get_flight, get_flights, get_summary, refresh_flights},
};

use super::*;

/// Expect passengers without observations to be listed as unknown
#[tokio::test]
async fn lists_unobserved_passengers_as_unknown() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .build()
        .await?;

    let resp = get_flights(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let flights: Vec<FlightDto> = read_json(resp).await;
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].id, 1);
    assert_eq!(flights[1].id, 2);
    assert!(flights.iter().all(|f| f.status == FlightState::Unknown));
    assert!(flights.iter().all(|f| f.observed_at.is_none()));

    Ok(())
}

/// Expect the latest stored observation to be reported with its telemetry
#[tokio::test]
async fn reports_latest_observation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .build()
        .await?;
    let now = chrono::Utc::now().naive_utc();
    test.flight_status()
        .insert_mock_status(1, "scheduled", now - chrono::Duration::hours(2))
        .await?;
    test.flight_status()
        .insert_mock_status(1, "landed", now)
        .await?;

    let resp = get_flights(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    let flights: Vec<FlightDto> = read_json(resp).await;
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].status, FlightState::Landed);
    assert!(flights[0].observed_at.is_some());

    Ok(())
}

/// Expect an empty list when nothing is tracked
#[tokio::test]
async fn lists_nothing_for_empty_tracker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = get_flights(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    let flights: Vec<FlightDto> = read_json(resp).await;
    assert!(flights.is_empty());

    Ok(())
}

/// Expect a single passenger's flight by ID
#[tokio::test]
async fn returns_single_flight() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .build()
        .await?;

    let resp = get_flight(State(test.app_state().await), Path(2))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let flight: FlightDto = read_json(resp).await;
    assert_eq!(flight.id, 2);
    assert_eq!(flight.flight_number, factory::mock_flight_number(2));

    Ok(())
}

/// Expect 404 for a passenger that does not exist
#[tokio::test]
async fn returns_not_found_for_unknown_passenger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = get_flight(State(test.app_state().await), Path(42))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = read_json(resp).await;
    assert_eq!(error.error, "Passenger not found");

    Ok(())
}

/// Expect counts by status and by airline
#[tokio::test]
async fn summarizes_flights() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .with_mock_passenger(3)
        .build()
        .await?;
    test.flight_status()
        .insert_mock_status(1, "in-air", chrono::Utc::now().naive_utc())
        .await?;

    let resp = get_summary(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let summary: StatusSummary = read_json(resp).await;
    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_status.get(&FlightState::InAir), Some(&1));
    assert_eq!(summary.by_status.get(&FlightState::Unknown), Some(&2));
    assert_eq!(summary.by_airline.values().sum::<usize>(), 3);

    Ok(())
}

/// Expect a manual refresh to query the provider and report per-passenger outcomes
#[tokio::test]
async fn refreshes_on_demand() -> Result<(), TestError> {
    let airline = skyward_test_utils::constant::TEST_AIRLINE;
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .with_status_endpoint(airline, "101", json!({ "status": "delayed" }), 1)
        .with_status_error_endpoint(airline, "102", 404, 1)
        .build()
        .await?;
    let state = test.app_state().await;

    let resp = refresh_flights(State(state.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: RefreshReport = read_json(resp).await;
    assert_eq!(report.succeeded, vec![1]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].passenger_id, 2);
    assert_eq!(report.alerted, vec![1]);

    let latest = state.store.latest_for(1).unwrap();
    assert_eq!(latest.status, "delayed");
    assert!(state.store.latest_for(2).is_none());
    test.assert_mocks();

    Ok(())
}

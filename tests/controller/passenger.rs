use axum::{body::Bytes, extract::Query};
use skyward::{
    model::{
        api::ErrorDto,
        report::{ClearReport, IngestReport},
    },
    server::controller::passenger::{clear_passengers, upload_manifest, UploadParams},
};

use super::*;

static HEADER: &str =
    "name,airline,flight_number,departure_airport,arrival_airport,departure_date\n";

/// Expect valid rows to be stored and incomplete rows to be reported
#[tokio::test]
async fn ingests_manifest() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let state = test.app_state().await;
    let csv = format!(
        "{HEADER}Ada Lovelace,SKY,101,LHR,JFK,2025-11-01\n\
         Alan Turing,,103,LHR,JFK,2025-11-01\n"
    );

    let params = UploadParams {
        file_name: Some("october.csv".to_string()),
    };

    let resp = upload_manifest(State(state.clone()), Query(params), Bytes::from(csv))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: IngestReport = read_json(resp).await;
    assert_eq!(report.ingested, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert_eq!(state.store.passengers().await.unwrap().len(), 1);

    let batches = state.store.batches(10).await.unwrap();
    assert_eq!(batches[0].id, report.batch_id);
    assert_eq!(batches[0].file_name, "october.csv");

    Ok(())
}

/// Expect 400 and nothing stored when a required column is missing
#[tokio::test]
async fn rejects_manifest_missing_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let state = test.app_state().await;
    let csv = "name,airline,flight_number\nAda Lovelace,SKY,101\n";

    let result = upload_manifest(
        State(state.clone()),
        Query(UploadParams::default()),
        Bytes::from(csv),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(resp).await;
    assert!(error.error.contains("departure_airport"));
    assert!(state.store.passengers().await.unwrap().is_empty());

    let batches = state.store.batches(10).await.unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].file_name, "manifest.csv");
    assert_eq!(batches[0].status, "failed");

    Ok(())
}

/// Expect clear to remove everything and report the counts
#[tokio::test]
async fn clears_all_passengers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_passenger(1)
        .with_mock_passenger(2)
        .build()
        .await?;
    test.flight_status()
        .insert_mock_status(1, "landed", chrono::Utc::now().naive_utc())
        .await?;
    let state = test.app_state().await;

    let resp = clear_passengers(State(state.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: ClearReport = read_json(resp).await;
    assert_eq!(
        report,
        ClearReport {
            observations_removed: 1,
            passengers_removed: 2,
        }
    );
    assert!(state.store.passengers().await.unwrap().is_empty());
    assert!(state.store.latest_for_all().is_empty());

    Ok(())
}

/// Expect clearing an empty tracker to succeed with zero counts
#[tokio::test]
async fn clears_empty_tracker() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let resp = clear_passengers(State(test.app_state().await))
        .await
        .unwrap()
        .into_response();

    let report: ClearReport = read_json(resp).await;
    assert_eq!(report, ClearReport::default());

    Ok(())
}

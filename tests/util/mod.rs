//! Helpers for building application state on top of a `TestContext`.

use std::{sync::Arc, time::Duration};

use axum::{body::Body, response::Response};
use serde::de::DeserializeOwned;
use skyward::server::{
    model::app::AppState,
    provider::HttpStatusProvider,
    scheduler::RefreshScheduler,
    service::refresh::{RefreshConfig, StatusRefresher},
    store::TrackerStore,
};
use skyward_test_utils::{constant::TEST_USER_AGENT, TestContext};

/// Extension trait for TestContext to create AppState backed by the mock provider
pub trait TestContextExt {
    async fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    async fn app_state(&self) -> AppState {
        let store = TrackerStore::open(self.db.clone()).await.unwrap();
        let provider = HttpStatusProvider::new(
            &self.provider_url(),
            None,
            TEST_USER_AGENT,
            Duration::from_secs(2),
        )
        .unwrap();

        let refresher = StatusRefresher::new(
            store.clone(),
            Arc::new(provider),
            RefreshConfig {
                provider_timeout: Duration::from_secs(2),
                concurrency: 2,
            },
        );

        // Never started; refreshes in tests run through `run_now`
        let scheduler = RefreshScheduler::new(refresher, Duration::from_secs(3600));

        AppState { store, scheduler }
    }
}

/// Reads a JSON response body into `T`.
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

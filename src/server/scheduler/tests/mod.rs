
use std::{sync::Arc, time::Duration};

use skyward_test_utils::prelude::*;

use super::*;
use crate::{
    model::flight::FlightState,
    server::{
        model::observation::Observation,
        provider::stub::{StubProvider, StubResponse},
        service::refresh::RefreshConfig,
        store::TrackerStore,
    },
};

fn scheduler(
    store: &TrackerStore,
    provider: Arc<StubProvider>,
    interval: Duration,
) -> RefreshScheduler {
    let refresher = StatusRefresher::new(
        store.clone(),
        provider,
        RefreshConfig {
            provider_timeout: Duration::from_secs(2),
            concurrency: 1,
        },
    );

    RefreshScheduler::new(refresher, interval)
}

/// Polls until `condition` holds or the deadline passes.
async fn wait_until<F>(deadline: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let started = tokio::time::Instant::now();
    while started.elapsed() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    false
}

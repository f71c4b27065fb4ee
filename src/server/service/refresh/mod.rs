//! Status refresh cycle.


use std::{sync::Arc, time::Duration};

use futures::{stream, StreamExt};

use crate::{
    model::report::{RefreshFailure, RefreshReport},
    server::{
        error::{provider::ProviderError, store::StoreError},
        provider::StatusProvider,
        scheduler::config as refresh_config,
        service::alert::AlertService,
        store::TrackerStore,
    },
};

/// Limits applied to a refresh cycle.
#[derive(Debug, Clone, Copy)]
pub struct RefreshConfig {
    /// Upper bound for a single provider query
    pub provider_timeout: Duration,
    /// Provider queries in flight at once
    pub concurrency: usize,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            provider_timeout: refresh_config::DEFAULT_PROVIDER_TIMEOUT,
            concurrency: refresh_config::DEFAULT_CONCURRENCY,
        }
    }
}

/// Queries the status provider for every passenger and records the results.
#[derive(Clone)]
pub struct StatusRefresher {
    store: TrackerStore,
    provider: Arc<dyn StatusProvider>,
    config: RefreshConfig,
}

impl StatusRefresher {
    /// Creates a new instance of [`StatusRefresher`].
    pub fn new(
        store: TrackerStore,
        provider: Arc<dyn StatusProvider>,
        config: RefreshConfig,
    ) -> Self {
        Self {
            store,
            provider,
            config,
        }
    }

    /// Runs one refresh cycle.
    ///
    /// Takes a snapshot of the passenger set, queries the provider for each passenger
    /// exactly once and appends an observation for every successful answer. Provider
    /// queries run with bounded concurrency, each under the configured timeout, and their
    /// results are applied in passenger order.
    ///
    /// A failing provider query, or a passenger removed before its observation could be
    /// stored, is recorded in the report and the cycle moves on. A stored observation that
    /// turns the flight delayed or cancelled raises an alert.
    ///
    /// # Returns
    /// - `Ok(RefreshReport)` - Passengers refreshed, failed and alerted, in passenger order
    /// - `Err(StoreError::Unavailable)` - Storage failed; the cycle was aborted
    pub async fn refresh_all(&self) -> Result<RefreshReport, StoreError> {
        let passengers = self.store.passengers().await?;
        let timeout = self.config.provider_timeout;
        let provider = &self.provider;

        tracing::debug!("Refreshing flight status for {} passenger(s)", passengers.len());

        let mut fetches = stream::iter(passengers.into_iter().map(|passenger| async move {
            let result = match tokio::time::timeout(
                timeout,
                provider.fetch_status(&passenger.airline, &passenger.flight_number),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            };

            (passenger, result)
        }))
        .buffered(self.config.concurrency.max(1));

        let alert_service = AlertService::new(&self.store);
        let mut report = RefreshReport::default();

        while let Some((passenger, result)) = fetches.next().await {
            let cause = match result {
                Ok(observation) => {
                    let previous = self.store.latest_for(passenger.id);

                    match self.store.append(passenger.id, observation).await {
                        Ok(_) => {
                            report.succeeded.push(passenger.id);

                            let latest = self.store.latest_for(passenger.id);
                            if alert_service
                                .notify(&passenger, previous.as_ref(), latest.as_ref())
                                .await?
                                .is_some()
                            {
                                report.alerted.push(passenger.id);
                            }

                            continue;
                        }
                        Err(e @ StoreError::UnknownPassenger(_)) => e.to_string(),
                        Err(e) => return Err(e),
                    }
                }
                Err(e) => e.to_string(),
            };

            tracing::warn!("Failed to refresh passenger {}: {}", passenger.id, cause);
            report.failed.push(RefreshFailure {
                passenger_id: passenger.id,
                cause,
            });
        }

        Ok(report)
    }
}

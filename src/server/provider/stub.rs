//! In-process status provider for tests.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    model::flight::FlightState,
    server::{
        error::provider::ProviderError, model::observation::Observation,
        provider::StatusProvider,
    },
};

/// How the stub answers for one flight number.
#[derive(Debug, Clone)]
pub enum StubResponse {
    Status(Observation),
    Fail,
    Hang,
    Slow(Duration, Observation),
}

/// Status provider answering from a fixed table keyed by flight number.
///
/// Flights without an entry fail with `NotFound`.
#[derive(Debug, Default)]
pub struct StubProvider {
    responses: HashMap<String, StubResponse>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, flight_number: impl Into<String>, response: StubResponse) -> Self {
        self.responses.insert(flight_number.into(), response);
        self
    }

    /// Answers `status` without telemetry for the flight.
    pub fn with_status(self, flight_number: impl Into<String>, status: FlightState) -> Self {
        self.with(
            flight_number,
            StubResponse::Status(Observation::status_only(status)),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusProvider for StubProvider {
    async fn fetch_status(
        &self,
        airline: &str,
        flight_number: &str,
    ) -> Result<Observation, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(flight_number) {
            Some(StubResponse::Status(observation)) => Ok(observation.clone()),
            Some(StubResponse::Slow(delay, observation)) => {
                tokio::time::sleep(*delay).await;
                Ok(observation.clone())
            }
            Some(StubResponse::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(ProviderError::Timeout(Duration::from_secs(3600)))
            }
            Some(StubResponse::Fail) | None => Err(ProviderError::NotFound {
                airline: airline.to_string(),
                flight_number: flight_number.to_string(),
            }),
        }
    }
}

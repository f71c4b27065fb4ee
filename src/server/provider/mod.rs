//! Flight status provider capability.
//!
//! The refresher only depends on [`StatusProvider`]; [`HttpStatusProvider`] is the production
//! implementation that talks to the configured provider over HTTP.

mod http;

#[cfg(test)]
pub mod stub;
#[cfg(test)]
mod tests;

pub use http::HttpStatusProvider;

use async_trait::async_trait;

use crate::server::{error::provider::ProviderError, model::observation::Observation};

/// Source of live flight status observations.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Fetches the current status of a flight.
    ///
    /// # Arguments
    /// - `airline` - Airline code as stored on the passenger
    /// - `flight_number` - Flight number as stored on the passenger
    ///
    /// # Returns
    /// - `Ok(Observation)` - Current status with any telemetry the provider reported
    /// - `Err(ProviderError)` - The flight is unknown, the provider failed or its answer could
    ///   not be understood
    async fn fetch_status(
        &self,
        airline: &str,
        flight_number: &str,
    ) -> Result<Observation, ProviderError>;
}

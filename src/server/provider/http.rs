use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{
    model::flight::{FlightState, UnrecognisedFlightState},
    server::{
        error::provider::ProviderError, model::observation::Observation,
        provider::StatusProvider,
    },
};

/// Status provider reached over HTTP at `GET {base}/flights/{airline}/{flight_number}`.
#[derive(Clone)]
pub struct HttpStatusProvider {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderStatusResponse {
    status: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    altitude: Option<f64>,
    velocity: Option<f64>,
    heading: Option<f64>,
    observed_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProviderStatusResponse> for Observation {
    type Error = ProviderError;

    fn try_from(response: ProviderStatusResponse) -> Result<Self, Self::Error> {
        let status: FlightState = response
            .status
            .parse()
            .map_err(|e: UnrecognisedFlightState| ProviderError::Malformed(e.to_string()))?;

        Ok(Observation {
            status,
            latitude: response.latitude,
            longitude: response.longitude,
            altitude: response.altitude,
            velocity: response.velocity,
            heading: response.heading,
            observed_at: response.observed_at.map(|at| at.naive_utc()),
        })
    }
}

impl HttpStatusProvider {
    /// Creates a new instance of [`HttpStatusProvider`].
    ///
    /// # Arguments
    /// - `base_url` - Provider root URL, e.g. `https://flights.example.com/v1`
    /// - `api_key` - Optional bearer token sent with every request
    /// - `user_agent` - User agent sent with every request
    /// - `timeout` - Upper bound for a single request
    ///
    /// # Returns
    /// - `Ok(HttpStatusProvider)` - Provider ready for queries
    /// - `Err(ProviderError::InvalidUrl)` - `base_url` is not an absolute http(s) URL
    /// - `Err(ProviderError::Http)` - The HTTP client could not be built
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ProviderError::InvalidUrl(base_url.to_string()))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            timeout,
        })
    }

    fn flight_url(&self, airline: &str, flight_number: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["flights", airline, flight_number]);

        Ok(url)
    }
}

#[async_trait]
impl StatusProvider for HttpStatusProvider {
    async fn fetch_status(
        &self,
        airline: &str,
        flight_number: &str,
    ) -> Result<Observation, ProviderError> {
        let url = self.flight_url(airline, flight_number)?;

        let mut request = self.client.get(url);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout)
            } else {
                ProviderError::Http(e)
            }
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ProviderError::NotFound {
                    airline: airline.to_string(),
                    flight_number: flight_number.to_string(),
                })
            }
            status if !status.is_success() => return Err(ProviderError::Status(status.as_u16())),
            _ => {}
        }

        let body = response.bytes().await?;
        let parsed: ProviderStatusResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        parsed.try_into()
    }
}

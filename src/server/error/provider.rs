use std::time::Duration;

use thiserror::Error;

/// Failure of a single status provider query.
///
/// During a refresh cycle these are recorded against the passenger and never abort the run.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider did not respond within {0:?}")]
    Timeout(Duration),
    #[error("Provider has no flight {airline} {flight_number}")]
    NotFound {
        airline: String,
        flight_number: String,
    },
    #[error("Provider responded with HTTP status {0}")]
    Status(u16),
    #[error("Provider returned a malformed response: {0}")]
    Malformed(String),
    #[error("Invalid provider URL {0:?}")]
    InvalidUrl(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

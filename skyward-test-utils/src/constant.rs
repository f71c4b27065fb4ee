//! Test configuration constants.

/// User agent sent by test provider clients.
pub static TEST_USER_AGENT: &str = "skyward-tests/1.0 (ops@example.com)";

/// Bearer token configured on test provider clients that authenticate.
pub static TEST_PROVIDER_API_KEY: &str = "provider_api_key";

/// Departure date used for every mock passenger.
pub static TEST_DEPARTURE_DATE: &str = "2025-11-01";

/// Airline code used for every mock passenger.
pub static TEST_AIRLINE: &str = "SKY";

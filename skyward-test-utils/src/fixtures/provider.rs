//! Mock flight status provider endpoints.

use mockito::Mock;

use crate::TestContext;

/// Path the provider serves a flight's status on.
pub fn status_path(airline: &str, flight_number: &str) -> String {
    format!("/flights/{}/{}", airline, flight_number)
}

impl TestContext {
    /// Create a mock endpoint returning the given JSON body for a flight.
    ///
    /// # Arguments
    /// - `airline` / `flight_number` - Flight the endpoint answers for
    /// - `body` - JSON returned with status 200
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_status_endpoint(
        &mut self,
        airline: &str,
        flight_number: &str,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", status_path(airline, flight_number).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that answers a flight lookup with an HTTP error status.
    pub fn create_status_error_endpoint(
        &mut self,
        airline: &str,
        flight_number: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", status_path(airline, flight_number).as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}

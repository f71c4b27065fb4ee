use chrono::NaiveDateTime;

use crate::model::flight::FlightState;

/// A status report for a single flight as returned by a status provider.
///
/// `observed_at` is the provider's own timestamp when it sends one; the store stamps
/// the current time otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub status: FlightState,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub heading: Option<f64>,
    pub observed_at: Option<NaiveDateTime>,
}

impl Observation {
    /// Creates an observation carrying only a status, without telemetry.
    pub fn status_only(status: FlightState) -> Self {
        Self {
            status,
            latitude: None,
            longitude: None,
            altitude: None,
            velocity: None,
            heading: None,
            observed_at: None,
        }
    }
}

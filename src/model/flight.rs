use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reported state of a flight.
///
/// Stored as its kebab-case name in the `flight_status.status` column.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FlightState {
    Scheduled,
    Delayed,
    Cancelled,
    InAir,
    Landed,
    Unknown,
}

impl FlightState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
            Self::InAir => "in-air",
            Self::Landed => "landed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognised flight status: {0:?}")]
pub struct UnrecognisedFlightState(pub String);

impl FromStr for FlightState {
    type Err = UnrecognisedFlightState;

    /// Parses a status case-insensitively, treating spaces and underscores as hyphens so
    /// `In Air`, `in_air` and `in-air` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");

        match normalized.as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "delayed" => Ok(Self::Delayed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "in-air" | "airborne" | "en-route" => Ok(Self::InAir),
            "landed" => Ok(Self::Landed),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnrecognisedFlightState(s.to_string())),
        }
    }
}

/// One row of the current flight view: a passenger and the latest status of their flight.
///
/// Telemetry and `observed_at` are omitted entirely when no observation exists yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: i32,
    pub passenger_name: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date: String,
    pub status: FlightState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
}

/// Aggregate counts over the current flight view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Number of tracked passengers
    pub total: usize,
    /// Passenger count keyed by flight status
    pub by_status: BTreeMap<FlightState, usize>,
    /// Passenger count keyed by airline
    pub by_airline: BTreeMap<String, usize>,
}

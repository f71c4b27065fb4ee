use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::flight::FlightState;

/// Outcome of a manifest upload as kept in the upload history.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum BatchStatus {
    Completed,
    Failed,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(other.to_string()),
        }
    }
}

/// One manifest upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDto {
    pub id: i32,
    pub file_name: String,
    pub status: BatchStatus,
    /// Number of passengers created
    pub ingested: i32,
    /// Number of rows left out
    pub skipped: i32,
    /// Why the upload was rejected, for failed batches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub uploaded_at: NaiveDateTime,
}

/// A delay or cancellation alert raised during a refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: i32,
    pub passenger_id: i32,
    pub passenger_name: String,
    pub airline: String,
    pub flight_number: String,
    pub status: FlightState,
    pub message: String,
    pub created_at: NaiveDateTime,
}

use serde::{Deserialize, Serialize};

/// Outcome of a manifest upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Upload history entry recorded for this manifest
    pub batch_id: i32,
    /// Number of passengers created
    pub ingested: usize,
    /// Rows that were not ingested and why
    pub skipped: Vec<SkippedRow>,
}

/// A manifest row that was left out of an ingest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based line number in the uploaded file
    pub line: u64,
    pub reason: String,
}

/// Outcome of one refresh cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    /// Passenger IDs that received a new observation, in passenger order
    pub succeeded: Vec<i32>,
    /// Passengers whose refresh failed, in passenger order
    pub failed: Vec<RefreshFailure>,
    /// Passengers whose flight turned delayed or cancelled during this cycle
    #[serde(default)]
    pub alerted: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshFailure {
    pub passenger_id: i32,
    pub cause: String,
}

/// Everything a clear removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearReport {
    pub observations_removed: u64,
    pub passengers_removed: u64,
}

//! Inputs for the upload and alert histories.

use crate::model::{
    flight::FlightState,
    history::{AlertDto, BatchDto, BatchStatus},
};

use super::db::{FlightAlertModel, UploadBatchModel};

/// A manifest upload about to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBatch {
    pub file_name: String,
    pub status: BatchStatus,
    pub ingested: usize,
    pub skipped: usize,
    pub error: Option<String>,
}

impl NewBatch {
    pub fn completed(file_name: &str, ingested: usize, skipped: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            status: BatchStatus::Completed,
            ingested,
            skipped,
            error: None,
        }
    }

    /// An upload rejected before any passenger was stored.
    pub fn failed(file_name: &str, error: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            status: BatchStatus::Failed,
            ingested: 0,
            skipped: 0,
            error: Some(error),
        }
    }
}

/// An alert about to be recorded for a passenger whose flight turned delayed or cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    pub passenger_id: i32,
    pub passenger_name: String,
    pub airline: String,
    pub flight_number: String,
    pub status: FlightState,
    pub message: String,
}

impl From<UploadBatchModel> for BatchDto {
    fn from(batch: UploadBatchModel) -> Self {
        Self {
            id: batch.id,
            file_name: batch.file_name,
            // Only the store writes this column
            status: batch.status.parse().unwrap_or(BatchStatus::Failed),
            ingested: batch.ingested,
            skipped: batch.skipped,
            error: batch.error,
            uploaded_at: batch.uploaded_at,
        }
    }
}

impl From<FlightAlertModel> for AlertDto {
    fn from(alert: FlightAlertModel) -> Self {
        Self {
            id: alert.id,
            passenger_id: alert.passenger_id,
            passenger_name: alert.passenger_name,
            airline: alert.airline,
            flight_number: alert.flight_number,
            status: alert.status.parse().unwrap_or(FlightState::Unknown),
            message: alert.message,
            created_at: alert.created_at,
        }
    }
}

//! Manifest ingestion.
//!
//! A manifest is CSV with a header row. Columns are matched by name, not position, and
//! header names are compared ignoring case, spaces, hyphens and underscores, so
//! `flight_number`, `Flight Number` and `flightNumber` all match.
//!
//! A header missing any required column rejects the whole manifest before anything is
//! written. Individual rows with a missing or blank required value are skipped and reported
//! with their line number.

#[cfg(test)]
mod tests;

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    model::{
        history::BatchDto,
        report::{IngestReport, SkippedRow},
    },
    server::{
        error::{
            ingest::{IngestError, RowSkipped},
            store::StoreError,
            Error,
        },
        model::{history::NewBatch, manifest::NewPassenger},
        store::{TrackerStore, HISTORY_LIMIT},
    },
};

/// Required columns, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "airline",
    "flight_number",
    "departure_airport",
    "arrival_airport",
    "departure_date",
];

/// Rows of a manifest split into passengers to store and rows left out.
#[derive(Debug, Default)]
pub struct ParsedManifest {
    pub passengers: Vec<NewPassenger>,
    pub skipped: Vec<SkippedRow>,
}

/// Position of each required column in the header.
struct ColumnMap([usize; REQUIRED_COLUMNS.len()]);

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let mut positions = [0; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();

        for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
            let wanted = normalize_header(column);
            match normalized.iter().position(|header| *header == wanted) {
                Some(position) => positions[slot] = position,
                None => missing.push(*column),
            }
        }

        if !missing.is_empty() {
            return Err(IngestError::SchemaMismatch { missing });
        }

        Ok(Self(positions))
    }

    fn passenger(&self, record: &StringRecord) -> Result<NewPassenger, RowSkipped> {
        let value = |slot: usize| -> Result<String, RowSkipped> {
            record
                .get(self.0[slot])
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .ok_or(RowSkipped::MissingValue(REQUIRED_COLUMNS[slot]))
        };

        Ok(NewPassenger {
            name: value(0)?,
            airline: value(1)?,
            flight_number: value(2)?,
            departure_airport: value(3)?,
            arrival_airport: value(4)?,
            departure_date: value(5)?,
        })
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parses a manifest without touching storage.
///
/// # Returns
/// - `Ok(ParsedManifest)` - Header valid; rows split into passengers and skipped rows
/// - `Err(IngestError::SchemaMismatch)` - One or more required columns are missing
/// - `Err(IngestError::Unreadable)` - The header row could not be read
pub fn parse_manifest<R: Read>(reader: R) -> Result<ParsedManifest, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(reader.headers()?)?;
    let mut parsed = ParsedManifest::default();

    for result in reader.records() {
        let (line, outcome) = match result {
            Ok(record) => (
                record.position().map(|p| p.line()).unwrap_or_default(),
                columns.passenger(&record),
            ),
            Err(e) => (
                e.position().map(|p| p.line()).unwrap_or_default(),
                Err(RowSkipped::Malformed(e.to_string())),
            ),
        };

        match outcome {
            Ok(passenger) => parsed.passengers.push(passenger),
            Err(reason) => {
                tracing::warn!("Skipping manifest line {}: {}", line, reason);
                parsed.skipped.push(SkippedRow {
                    line,
                    reason: reason.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}

/// Service ingesting passenger manifests into the tracker store.
pub struct ManifestService<'a> {
    store: &'a TrackerStore,
}

impl<'a> ManifestService<'a> {
    /// Creates a new instance of [`ManifestService`].
    pub fn new(store: &'a TrackerStore) -> Self {
        Self { store }
    }

    /// Parses a manifest and stores every valid row as a new passenger.
    ///
    /// Passengers are stored in one transaction together with a completed upload batch.
    /// Ingesting the same manifest twice creates duplicate passengers; clear first for a
    /// fresh import. A rejected manifest is recorded as a failed batch before the error is
    /// returned.
    ///
    /// # Returns
    /// - `Ok(IngestReport)` - Recorded batch, number of passengers created and skipped rows
    /// - `Err(Error::IngestError)` - The manifest was rejected as a whole; nothing stored
    /// - `Err(Error::StoreError)` - Storage failed; nothing stored
    pub async fn ingest<R: Read>(
        &self,
        file_name: &str,
        reader: R,
    ) -> Result<IngestReport, Error> {
        let ParsedManifest {
            passengers,
            skipped,
        } = match parse_manifest(reader) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.record_failure(file_name, &e).await;
                return Err(e.into());
            }
        };

        let stored = self
            .store
            .insert_passengers(file_name, skipped.len(), passengers)
            .await?;

        tracing::info!(
            "Ingested {} passenger(s) from {}, skipped {} row(s)",
            stored.passengers.len(),
            file_name,
            skipped.len()
        );

        Ok(IngestReport {
            batch_id: stored.batch.id,
            ingested: stored.passengers.len(),
            skipped,
        })
    }

    /// Most recent uploads, newest first.
    pub async fn recent_batches(&self) -> Result<Vec<BatchDto>, StoreError> {
        let batches = self.store.batches(HISTORY_LIMIT).await?;

        Ok(batches.into_iter().map(BatchDto::from).collect())
    }

    async fn record_failure(&self, file_name: &str, error: &IngestError) {
        tracing::warn!("Rejected manifest {}: {}", file_name, error);

        if let Err(e) = self
            .store
            .record_batch(NewBatch::failed(file_name, error.to_string()))
            .await
        {
            tracing::error!("Failed to record rejected upload {}: {}", file_name, e);
        }
    }
}

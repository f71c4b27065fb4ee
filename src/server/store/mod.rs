//! Tracker store owning passengers and their status observations.
//!
//! The store is the single owner of the database handle. Writes are serialized through a
//! writer lock and each runs in its own transaction. The latest observation per passenger is
//! kept in an in-memory [`LatestIndex`] that is rebuilt once when the store opens and updated
//! after every committed append, so resolving the current view never rescans observation
//! history.
//!
//! The upload and alert histories live in the same database but are not part of the tracked
//! state: a clear leaves them in place.

mod clear;
mod history;
mod index;
mod observation;
mod passenger;

#[cfg(test)]
mod tests;

pub use history::HISTORY_LIMIT;
pub use index::LatestIndex;
pub use passenger::StoredManifest;

use std::{collections::HashMap, sync::Arc};

use futures::TryStreamExt;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::server::{
    data::flight_status::FlightStatusRepository,
    error::store::StoreError,
    model::db::{PassengerModel, StatusObservationModel},
};

/// Handle to the shared tracker store.
///
/// Cloning is cheap; all clones share the same connection, writer lock and index.
///
/// The index lock is synchronous and never held across an await, so once an append has
/// committed its index update cannot be cancelled by dropping the caller's future.
#[derive(Clone)]
pub struct TrackerStore {
    inner: Arc<TrackerStoreRef>,
}

struct TrackerStoreRef {
    db: DatabaseConnection,
    writer: Mutex<()>,
    index: RwLock<LatestIndex>,
}

/// Passengers together with the latest observation per passenger.
pub struct TrackerSnapshot {
    pub passengers: Vec<PassengerModel>,
    pub latest: HashMap<i32, StatusObservationModel>,
}

impl TrackerStore {
    /// Opens the store on an already migrated database.
    ///
    /// Streams stored observations once to build the latest-observation index, so only the
    /// latest observation per passenger is held in memory.
    ///
    /// # Returns
    /// - `Ok(TrackerStore)` - Store ready for use
    /// - `Err(StoreError::Unavailable)` - Observations could not be loaded
    pub async fn open(db: DatabaseConnection) -> Result<Self, StoreError> {
        let index = {
            let repository = FlightStatusRepository::new(&db);
            let mut observations = repository.stream_all().await?;

            let mut index = LatestIndex::default();
            while let Some(observation) = observations.try_next().await? {
                index.record(observation);
            }

            index
        };

        tracing::debug!(
            "Opened tracker store with latest observations for {} passenger(s)",
            index.len()
        );

        Ok(Self {
            inner: Arc::new(TrackerStoreRef {
                db,
                writer: Mutex::new(()),
                index: RwLock::new(index),
            }),
        })
    }

    /// Reads all passengers, then clones the latest index.
    pub async fn snapshot(&self) -> Result<TrackerSnapshot, StoreError> {
        let passengers = self.passengers().await?;
        let latest = self.latest_for_all();

        Ok(TrackerSnapshot {
            passengers,
            latest,
        })
    }
}

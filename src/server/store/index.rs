//! In-memory index of the latest observation per passenger.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::server::model::db::StatusObservationModel;

/// Ordering key for latest resolution; later `observed_at` wins, ties go to the higher id.
fn latest_key(observation: &StatusObservationModel) -> (NaiveDateTime, i32) {
    (observation.observed_at, observation.id)
}

/// Latest observation per passenger, kept current on every append.
#[derive(Debug, Default, Clone)]
pub struct LatestIndex {
    latest: HashMap<i32, StatusObservationModel>,
}

impl LatestIndex {
    /// Builds the index in a single pass over stored observations.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = StatusObservationModel>,
    {
        let mut index = Self::default();
        for observation in observations {
            index.record(observation);
        }

        index
    }

    /// Records an observation, replacing the current latest only if it orders after it.
    ///
    /// Returns `true` when the observation became the passenger's latest.
    pub fn record(&mut self, observation: StatusObservationModel) -> bool {
        match self.latest.get(&observation.passenger_id) {
            Some(current) if latest_key(current) >= latest_key(&observation) => false,
            _ => {
                self.latest.insert(observation.passenger_id, observation);
                true
            }
        }
    }

    pub fn get(&self, passenger_id: i32) -> Option<&StatusObservationModel> {
        self.latest.get(&passenger_id)
    }

    pub fn snapshot(&self) -> HashMap<i32, StatusObservationModel> {
        self.latest.clone()
    }

    pub fn clear(&mut self) {
        self.latest.clear();
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::StatusObservationModel, TestContext};

impl TestContext {
    pub fn flight_status<'a>(&'a self) -> FlightStatusFixtures<'a> {
        FlightStatusFixtures { setup: self }
    }
}

pub struct FlightStatusFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FlightStatusFixtures<'a> {
    /// Insert a status observation without telemetry directly into the database.
    pub async fn insert_mock_status(
        &self,
        passenger_id: i32,
        status: &str,
        observed_at: NaiveDateTime,
    ) -> Result<StatusObservationModel, TestError> {
        Ok(
            entity::prelude::FlightStatus::insert(entity::flight_status::ActiveModel {
                passenger_id: ActiveValue::Set(passenger_id),
                status: ActiveValue::Set(status.to_string()),
                latitude: ActiveValue::Set(None),
                longitude: ActiveValue::Set(None),
                altitude: ActiveValue::Set(None),
                velocity: ActiveValue::Set(None),
                heading: ActiveValue::Set(None),
                observed_at: ActiveValue::Set(observed_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

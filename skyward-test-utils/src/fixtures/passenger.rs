use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_AIRLINE, TEST_DEPARTURE_DATE},
    error::TestError,
    fixtures::factory::mock_flight_number,
    model::PassengerModel,
    TestContext,
};

impl TestContext {
    pub fn passenger<'a>(&'a self) -> PassengerFixtures<'a> {
        PassengerFixtures { setup: self }
    }
}

pub struct PassengerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PassengerFixtures<'a> {
    /// Insert a passenger named `Passenger {n}` on flight `SKY {100 + n}`.
    ///
    /// The database assigns the ID; on a fresh table inserting 1, 2, 3 in order yields
    /// IDs 1, 2, 3.
    pub async fn insert_mock_passenger(&self, n: i32) -> Result<PassengerModel, TestError> {
        Ok(
            entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
                name: ActiveValue::Set(format!("Passenger {}", n)),
                airline: ActiveValue::Set(TEST_AIRLINE.to_string()),
                flight_number: ActiveValue::Set(mock_flight_number(n)),
                departure_airport: ActiveValue::Set("LHR".to_string()),
                arrival_airport: ActiveValue::Set("JFK".to_string()),
                departure_date: ActiveValue::Set(TEST_DEPARTURE_DATE.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

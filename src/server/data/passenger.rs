use chrono::Utc;
use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::model::{db::PassengerModel, manifest::NewPassenger};

pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    /// Creates a new instance of [`PassengerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a batch of passengers, returning the stored models in input order
    pub async fn create_many(
        &self,
        passengers: Vec<NewPassenger>,
    ) -> Result<Vec<PassengerModel>, DbErr> {
        if passengers.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let passengers = passengers
            .into_iter()
            .map(|p| entity::passenger::ActiveModel {
                name: ActiveValue::Set(p.name),
                airline: ActiveValue::Set(p.airline),
                flight_number: ActiveValue::Set(p.flight_number),
                departure_airport: ActiveValue::Set(p.departure_airport),
                arrival_airport: ActiveValue::Set(p.arrival_airport),
                departure_date: ActiveValue::Set(p.departure_date),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Passenger::insert_many(passengers)
            .exec_with_returning(self.db)
            .await
    }

    /// Returns every passenger ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PassengerModel>, DbErr> {
        entity::prelude::Passenger::find()
            .order_by_asc(entity::passenger::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, passenger_id: i32) -> Result<Option<PassengerModel>, DbErr> {
        entity::prelude::Passenger::find_by_id(passenger_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, passenger_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Passenger::find_by_id(passenger_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes every passenger
    ///
    /// Observations reference passengers, so they must be removed first.
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Passenger::delete_many().exec(self.db).await
    }
}

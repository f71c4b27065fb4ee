use chrono::Utc;
use futures::{stream::BoxStream, StreamExt};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryOrder, StreamTrait,
};

use crate::server::model::{db::StatusObservationModel, observation::Observation};

pub struct FlightStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightStatusRepository<'a, C> {
    /// Creates a new instance of [`FlightStatusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an observation for a passenger
    ///
    /// The observation is stamped with the current time when it carries none.
    pub async fn create(
        &self,
        passenger_id: i32,
        observation: Observation,
    ) -> Result<StatusObservationModel, DbErr> {
        let status = entity::flight_status::ActiveModel {
            passenger_id: ActiveValue::Set(passenger_id),
            status: ActiveValue::Set(observation.status.as_str().to_string()),
            latitude: ActiveValue::Set(observation.latitude),
            longitude: ActiveValue::Set(observation.longitude),
            altitude: ActiveValue::Set(observation.altitude),
            velocity: ActiveValue::Set(observation.velocity),
            heading: ActiveValue::Set(observation.heading),
            observed_at: ActiveValue::Set(
                observation
                    .observed_at
                    .unwrap_or_else(|| Utc::now().naive_utc()),
            ),
            ..Default::default()
        };

        status.insert(self.db).await
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::FlightStatus::delete_many()
            .exec(self.db)
            .await
    }
}

impl<'a, C: ConnectionTrait + StreamTrait + Send> FlightStatusRepository<'a, C> {
    /// Streams every observation in ID order without loading the full history at once
    pub async fn stream_all(
        &self,
    ) -> Result<BoxStream<'a, Result<StatusObservationModel, DbErr>>, DbErr> {
        let stream = entity::prelude::FlightStatus::find()
            .order_by_asc(entity::flight_status::Column::Id)
            .stream(self.db)
            .await?;

        Ok(stream.boxed())
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::{db::FlightAlertModel, history::NewAlert};

pub struct FlightAlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightAlertRepository<'a, C> {
    /// Creates a new instance of [`FlightAlertRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, alert: NewAlert) -> Result<FlightAlertModel, DbErr> {
        let alert = entity::flight_alert::ActiveModel {
            passenger_id: ActiveValue::Set(alert.passenger_id),
            passenger_name: ActiveValue::Set(alert.passenger_name),
            airline: ActiveValue::Set(alert.airline),
            flight_number: ActiveValue::Set(alert.flight_number),
            status: ActiveValue::Set(alert.status.as_str().to_string()),
            message: ActiveValue::Set(alert.message),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        alert.insert(self.db).await
    }

    /// Returns up to `limit` alerts, newest first
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<FlightAlertModel>, DbErr> {
        entity::prelude::FlightAlert::find()
            .order_by_desc(entity::flight_alert::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

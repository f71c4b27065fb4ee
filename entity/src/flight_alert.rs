use sea_orm::entity::prelude::*;

/// Alert raised when a flight turns delayed or cancelled.
///
/// Passenger and flight details are copied in so the history outlives a clear.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub passenger_id: i32,
    pub passenger_name: String,
    pub airline: String,
    pub flight_number: String,
    pub status: String,
    pub message: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

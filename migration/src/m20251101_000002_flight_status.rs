use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_passenger::Passenger;

static IDX_FLIGHT_STATUS_PASSENGER_OBSERVED: &str = "idx-flight_status-passenger_id-observed_at";
static FK_FLIGHT_STATUS_PASSENGER_ID: &str = "fk-flight_status-passenger_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add a foreign key to an existing table, so it is declared inline
        manager
            .create_table(
                Table::create()
                    .table(FlightStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightStatus::Id))
                    .col(integer(FlightStatus::PassengerId))
                    .col(string(FlightStatus::Status))
                    .col(double_null(FlightStatus::Latitude))
                    .col(double_null(FlightStatus::Longitude))
                    .col(double_null(FlightStatus::Altitude))
                    .col(double_null(FlightStatus::Velocity))
                    .col(double_null(FlightStatus::Heading))
                    .col(timestamp(FlightStatus::ObservedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FLIGHT_STATUS_PASSENGER_ID)
                            .from(FlightStatus::Table, FlightStatus::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_STATUS_PASSENGER_OBSERVED)
                    .table(FlightStatus::Table)
                    .col(FlightStatus::PassengerId)
                    .col(FlightStatus::ObservedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_STATUS_PASSENGER_OBSERVED)
                    .table(FlightStatus::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightStatus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FlightStatus {
    Table,
    Id,
    PassengerId,
    Status,
    Latitude,
    Longitude,
    Altitude,
    Velocity,
    Heading,
    ObservedAt,
}

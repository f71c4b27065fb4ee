use sea_orm_migration::{prelude::*, schema::*};

static IDX_FLIGHT_ALERT_CREATED_AT: &str = "idx-flight_alert-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to passenger; alert history is kept across clears
        manager
            .create_table(
                Table::create()
                    .table(FlightAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightAlert::Id))
                    .col(integer(FlightAlert::PassengerId))
                    .col(string(FlightAlert::PassengerName))
                    .col(string(FlightAlert::Airline))
                    .col(string(FlightAlert::FlightNumber))
                    .col(string(FlightAlert::Status))
                    .col(text(FlightAlert::Message))
                    .col(timestamp(FlightAlert::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_ALERT_CREATED_AT)
                    .table(FlightAlert::Table)
                    .col(FlightAlert::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_ALERT_CREATED_AT)
                    .table(FlightAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FlightAlert {
    Table,
    Id,
    PassengerId,
    PassengerName,
    Airline,
    FlightNumber,
    Status,
    Message,
    CreatedAt,
}

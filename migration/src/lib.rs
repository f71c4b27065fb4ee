pub use sea_orm_migration::prelude::*;

mod m20251101_000001_passenger;
mod m20251101_000002_flight_status;
mod m20251101_000003_upload_batch;
mod m20251101_000004_flight_alert;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_passenger::Migration),
            Box::new(m20251101_000002_flight_status::Migration),
            Box::new(m20251101_000003_upload_batch::Migration),
            Box::new(m20251101_000004_flight_alert::Migration),
        ]
    }
}

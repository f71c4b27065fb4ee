use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadBatch::Table)
                    .if_not_exists()
                    .col(pk_auto(UploadBatch::Id))
                    .col(string(UploadBatch::FileName))
                    .col(string(UploadBatch::Status))
                    .col(integer(UploadBatch::Ingested))
                    .col(integer(UploadBatch::Skipped))
                    .col(text_null(UploadBatch::Error))
                    .col(timestamp(UploadBatch::UploadedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadBatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UploadBatch {
    Table,
    Id,
    FileName,
    Status,
    Ingested,
    Skipped,
    Error,
    UploadedAt,
}

//! Create `machine` table.
//!
//! Status is stored as its string literal; last maintenance is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Machine::Table)
                    .if_not_exists()
                    .col(uuid(Machine::Id).primary_key())
                    .col(string_len(Machine::Name, 128).not_null())
                    .col(string_len(Machine::Status, 32).not_null())
                    .col(
                        ColumnDef::new(Machine::LastMaintenanceDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Machine::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Machine::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Machine::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Machine { Table, Id, Name, Status, LastMaintenanceDate, CreatedAt, UpdatedAt }

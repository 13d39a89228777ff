//! Create `employee` table with FK to `machine`.
//!
//! Deleting a machine removes its employees (cascade).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(string_len(Employee::Name, 128).not_null())
                    .col(string_len(Employee::Position, 32).not_null())
                    .col(uuid(Employee::MachineId).not_null())
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Employee::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_machine")
                            .from(Employee::Table, Employee::MachineId)
                            .to(Machine::Table, Machine::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, Name, Position, MachineId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Machine { Table, Id }

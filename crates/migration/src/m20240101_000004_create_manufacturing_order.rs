//! Create `manufacturing_order` table with FKs to `product` and `machine`.
//!
//! Deleting either referenced row removes the order (cascade).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManufacturingOrder::Table)
                    .if_not_exists()
                    .col(uuid(ManufacturingOrder::Id).primary_key())
                    .col(string_len(ManufacturingOrder::Project, 128).not_null())
                    .col(string_len(ManufacturingOrder::Status, 32).not_null())
                    .col(integer(ManufacturingOrder::Quantity).not_null())
                    .col(timestamp_with_time_zone(ManufacturingOrder::Date).not_null())
                    .col(uuid(ManufacturingOrder::ProductId).not_null())
                    .col(uuid(ManufacturingOrder::MachineId).not_null())
                    .col(timestamp_with_time_zone(ManufacturingOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ManufacturingOrder::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product")
                            .from(ManufacturingOrder::Table, ManufacturingOrder::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_machine")
                            .from(ManufacturingOrder::Table, ManufacturingOrder::MachineId)
                            .to(Machine::Table, Machine::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManufacturingOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ManufacturingOrder {
    Table,
    Id,
    Project,
    Status,
    Quantity,
    Date,
    ProductId,
    MachineId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Product { Table, Id }

#[derive(DeriveIden)]
enum Machine { Table, Id }

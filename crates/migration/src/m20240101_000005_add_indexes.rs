use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: index on machine_id
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_machine")
                    .table(Employee::Table)
                    .col(Employee::MachineId)
                    .to_owned(),
            )
            .await?;

        // Order: indexes on both FK columns and the order date (trend query)
        manager
            .create_index(
                Index::create()
                    .name("idx_order_machine")
                    .table(ManufacturingOrder::Table)
                    .col(ManufacturingOrder::MachineId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_product")
                    .table(ManufacturingOrder::Table)
                    .col(ManufacturingOrder::ProductId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_date")
                    .table(ManufacturingOrder::Table)
                    .col(ManufacturingOrder::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employee_machine").table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_machine").table(ManufacturingOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_product").table(ManufacturingOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_date").table(ManufacturingOrder::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employee { Table, MachineId }

#[derive(DeriveIden)]
enum ManufacturingOrder { Table, MachineId, ProductId, Date }

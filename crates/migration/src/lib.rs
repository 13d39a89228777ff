//! Migrator registering table migrations in dependency order.
//! Machines and products come first (referenced by the others); indexes last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_machine;
mod m20240101_000002_create_product;
mod m20240101_000003_create_employee;
mod m20240101_000004_create_manufacturing_order;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_machine::Migration),
            Box::new(m20240101_000002_create_product::Migration),
            Box::new(m20240101_000003_create_employee::Migration),
            Box::new(m20240101_000004_create_manufacturing_order::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{employee, manufacturing_order};

/// Operational state of a machine, stored as its string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MachineStatus {
    #[sea_orm(string_value = "OPERATIONAL")]
    Operational,
    #[sea_orm(string_value = "UNDER_SERVICE")]
    UnderService,
    #[sea_orm(string_value = "ERROR")]
    Error,
    #[sea_orm(string_value = "IDLE")]
    Idle,
    #[sea_orm(string_value = "DECOMMISSIONED")]
    Decommissioned,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machine")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub status: MachineStatus,
    pub last_maintenance_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employees,
    ManufacturingOrders,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employees => Entity::has_many(employee::Entity).into(),
            Relation::ManufacturingOrders => Entity::has_many(manufacturing_order::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

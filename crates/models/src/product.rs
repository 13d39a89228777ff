use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::manufacturing_order;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[sea_orm(string_value = "COMPONENT")]
    Component,
    #[sea_orm(string_value = "MODULE")]
    Module,
    #[sea_orm(string_value = "RESOURCE")]
    Resource,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    // `type` on the wire and in the table; `kind` in Rust
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub stock: i32,
    pub supplier: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ManufacturingOrders,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ManufacturingOrders => Entity::has_many(manufacturing_order::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

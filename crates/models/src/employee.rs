use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::machine;

/// The eleven plant roles an employee can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeePosition {
    #[sea_orm(string_value = "OPERATOR")]
    Operator,
    #[sea_orm(string_value = "TECHNICIAN")]
    Technician,
    #[sea_orm(string_value = "SUPERVISOR")]
    Supervisor,
    #[sea_orm(string_value = "QUALITY_INSPECTOR")]
    QualityInspector,
    #[sea_orm(string_value = "PRODUCTION_MANAGER")]
    ProductionManager,
    #[sea_orm(string_value = "ASSEMBLER")]
    Assembler,
    #[sea_orm(string_value = "MAINTENANCE_ENGINEER")]
    MaintenanceEngineer,
    #[sea_orm(string_value = "LOGISTICS_COORDINATOR")]
    LogisticsCoordinator,
    #[sea_orm(string_value = "SAFETY_OFFICER")]
    SafetyOfficer,
    #[sea_orm(string_value = "SHIFT_LEADER")]
    ShiftLeader,
    #[sea_orm(string_value = "TOOLMAKER")]
    Toolmaker,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub position: EmployeePosition,
    pub machine_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Machine,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Machine => Entity::belongs_to(machine::Entity)
                .from(Column::MachineId)
                .to(machine::Column::Id)
                .into(),
        }
    }
}

impl Related<machine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Machine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use models::{employee, machine};

use crate::errors::ServiceError;
use crate::payloads::EmployeePayload;

/// Retrieve all employees.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>, ServiceError> {
    employee::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a new employee. The referenced machine must exist; resolution
/// failure aborts before anything is written.
pub async fn create_employee(
    db: &DatabaseConnection,
    payload: EmployeePayload,
) -> Result<employee::Model, ServiceError> {
    payload.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    machine::Entity::find_by_id(payload.machine_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_machine(payload.machine_id))?;

    let now = Utc::now();
    let am = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        position: Set(payload.position),
        machine_id: Set(payload.machine_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let created = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// Full-replace update, gated on both the employee and the referenced
/// machine existing.
pub async fn update_employee(
    db: &DatabaseConnection,
    id: Uuid,
    payload: EmployeePayload,
) -> Result<employee::Model, ServiceError> {
    payload.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut am: employee::ActiveModel = employee::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("employee"))?
        .into();

    machine::Entity::find_by_id(payload.machine_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_machine(payload.machine_id))?;

    am.name = Set(payload.name);
    am.position = Set(payload.position);
    am.machine_id = Set(payload.machine_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete by id; missing ids are a silent no-op.
pub async fn delete_employee(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    employee::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

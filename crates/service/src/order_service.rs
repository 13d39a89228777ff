use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

use models::manufacturing_order::{self, OrderStatus};
use models::{machine, product};

use crate::errors::ServiceError;
use crate::payloads::{CreateOrderPayload, UpdateOrderPayload};

/// Retrieve all manufacturing orders.
pub async fn list_orders(
    db: &DatabaseConnection,
) -> Result<Vec<manufacturing_order::Model>, ServiceError> {
    manufacturing_order::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Retrieve an order by id. Absence is an empty result, not an error.
pub async fn get_order(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<manufacturing_order::Model>, ServiceError> {
    manufacturing_order::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a new order. Product and machine are resolved first; a new order
/// always starts awaiting approval.
pub async fn create_order(
    db: &DatabaseConnection,
    payload: CreateOrderPayload,
) -> Result<manufacturing_order::Model, ServiceError> {
    payload.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    product::Entity::find_by_id(payload.product_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_product(payload.product_id))?;

    machine::Entity::find_by_id(payload.machine_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_machine(payload.machine_id))?;

    let now = Utc::now();
    let am = manufacturing_order::ActiveModel {
        id: Set(Uuid::new_v4()),
        project: Set(payload.project),
        status: Set(OrderStatus::AwaitingApproval),
        quantity: Set(payload.quantity),
        date: Set(payload.date),
        product_id: Set(payload.product_id),
        machine_id: Set(payload.machine_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    let created = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = %created.id, project = %created.project, "created manufacturing order awaiting approval");
    Ok(created)
}

/// Full-replace update. The order itself and both references must resolve;
/// id and created_at are preserved.
pub async fn update_order(
    db: &DatabaseConnection,
    id: Uuid,
    payload: UpdateOrderPayload,
) -> Result<manufacturing_order::Model, ServiceError> {
    payload.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut am: manufacturing_order::ActiveModel = manufacturing_order::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::order_not_found(id))?
        .into();

    product::Entity::find_by_id(payload.product_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_product(payload.product_id))?;

    machine::Entity::find_by_id(payload.machine_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::missing_machine(payload.machine_id))?;

    am.project = Set(payload.project);
    am.status = Set(payload.status);
    am.quantity = Set(payload.quantity);
    am.date = Set(payload.date);
    am.product_id = Set(payload.product_id);
    am.machine_id = Set(payload.machine_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete by id. Unlike the other entities, a missing order is reported.
pub async fn delete_order(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    manufacturing_order::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::order_not_found(id))?;
    manufacturing_order::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Set the status field only; every other field is left untouched.
pub async fn update_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: OrderStatus,
) -> Result<manufacturing_order::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut am: manufacturing_order::ActiveModel = manufacturing_order::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::order_not_found(id))?
        .into();
    am.status = Set(status);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

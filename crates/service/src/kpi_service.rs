//! Read-only aggregate statistics over current entity state. Every call
//! recomputes from the store; nothing is cached.

use std::collections::HashMap;

use sea_orm::{ActiveEnum, DatabaseConnection, EntityTrait};

use models::{employee, machine, manufacturing_order, product};

use crate::errors::ServiceError;

/// Products with stock strictly below this show up in stock alerts.
const STOCK_ALERT_THRESHOLD: i32 = 10;

/// Count of orders per distinct status currently present.
pub async fn orders_status_count(
    db: &DatabaseConnection,
) -> Result<HashMap<String, i64>, ServiceError> {
    let orders = manufacturing_order::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut counts: HashMap<String, i64> = HashMap::new();
    for order in orders {
        *counts.entry(order.status.to_value()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Count of machines per distinct status currently present.
pub async fn machine_status_count(
    db: &DatabaseConnection,
) -> Result<HashMap<String, i64>, ServiceError> {
    let machines = machine::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut counts: HashMap<String, i64> = HashMap::new();
    for m in machines {
        *counts.entry(m.status.to_value()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Product name to stock for products below the alert threshold.
/// Names are not unique; a later row overwrites an earlier one.
pub async fn product_stock_alerts(
    db: &DatabaseConnection,
) -> Result<HashMap<String, i32>, ServiceError> {
    let products = product::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut alerts = HashMap::new();
    for p in products {
        if p.stock < STOCK_ALERT_THRESHOLD {
            alerts.insert(p.name, p.stock);
        }
    }
    Ok(alerts)
}

/// Employee name to 1 when assigned to a machine. Assignment is mandatory,
/// so the value is always 1; duplicate names collide like stock alerts.
pub async fn employee_workload(
    db: &DatabaseConnection,
) -> Result<HashMap<String, i64>, ServiceError> {
    let employees = employee::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut workload = HashMap::new();
    for e in employees {
        workload.insert(e.name, 1);
    }
    Ok(workload)
}

/// Orders per calendar date, across the entire order history.
pub async fn orders_trend(db: &DatabaseConnection) -> Result<HashMap<String, i64>, ServiceError> {
    let orders = manufacturing_order::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let mut trend: HashMap<String, i64> = HashMap::new();
    for order in orders {
        *trend.entry(order.date.date_naive().to_string()).or_insert(0) += 1;
    }
    Ok(trend)
}

/// Percentage of all orders assigned to each machine. Machines with no
/// orders report 0.0, as does every machine when no orders exist.
pub async fn machine_utilization(
    db: &DatabaseConnection,
) -> Result<HashMap<String, f64>, ServiceError> {
    let orders = manufacturing_order::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let machines = machine::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let total = orders.len();
    let mut utilization = HashMap::new();
    for m in machines {
        let assigned = orders.iter().filter(|o| o.machine_id == m.id).count();
        let percent = if total > 0 {
            assigned as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        utilization.insert(m.name, percent);
    }
    Ok(utilization)
}

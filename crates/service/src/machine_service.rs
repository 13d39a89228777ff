use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use models::machine;

use crate::errors::ServiceError;
use crate::payloads::MachinePayload;

/// Retrieve all machines.
pub async fn list_machines(db: &DatabaseConnection) -> Result<Vec<machine::Model>, ServiceError> {
    machine::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a new machine with a generated id and fresh timestamps.
pub async fn create_machine(
    db: &DatabaseConnection,
    payload: MachinePayload,
) -> Result<machine::Model, ServiceError> {
    payload.validate()?;
    let now = Utc::now();
    let am = machine::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        status: Set(payload.status),
        last_maintenance_date: Set(payload.last_maintenance_date),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Full-replace update; id and created_at are preserved, updated_at refreshed.
pub async fn update_machine(
    db: &DatabaseConnection,
    id: Uuid,
    payload: MachinePayload,
) -> Result<machine::Model, ServiceError> {
    payload.validate()?;
    let mut am: machine::ActiveModel = machine::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("machine"))?
        .into();
    am.name = Set(payload.name);
    am.status = Set(payload.status);
    am.last_maintenance_date = Set(payload.last_maintenance_date);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by id. A missing id is a silent no-op; the store cascades the
/// machine's employees and orders.
pub async fn delete_machine(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    machine::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::machine::MachineStatus;

    #[tokio::test]
    async fn machine_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let name = format!("press_{}", Uuid::new_v4());
        let payload = MachinePayload {
            name: name.clone(),
            status: MachineStatus::Operational,
            last_maintenance_date: None,
        };
        let m = create_machine(&db, payload).await?;
        assert_eq!(m.name, name);
        assert_eq!(m.created_at, m.updated_at);

        let listed = list_machines(&db).await?;
        assert!(listed.iter().any(|x| x.id == m.id));

        let renamed = format!("press_renamed_{}", Uuid::new_v4());
        let updated = update_machine(
            &db,
            m.id,
            MachinePayload {
                name: renamed.clone(),
                status: MachineStatus::UnderService,
                last_maintenance_date: Some(Utc::now().into()),
            },
        )
        .await?;
        assert_eq!(updated.name, renamed);
        assert_eq!(updated.status, MachineStatus::UnderService);
        assert_eq!(updated.created_at, m.created_at);
        assert!(updated.updated_at >= m.updated_at);

        delete_machine(&db, m.id).await?;
        assert!(!list_machines(&db).await?.iter().any(|x| x.id == m.id));

        // deleting again stays a silent no-op
        delete_machine(&db, m.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn updating_missing_machine_reports_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let res = update_machine(
            &db,
            Uuid::new_v4(),
            MachinePayload {
                name: "ghost".into(),
                status: MachineStatus::Idle,
                last_maintenance_date: None,
            },
        )
        .await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}

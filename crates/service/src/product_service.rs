use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use models::product;

use crate::errors::ServiceError;
use crate::payloads::ProductPayload;

/// Retrieve all products.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    product::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a new product with a generated id and fresh timestamps.
pub async fn create_product(
    db: &DatabaseConnection,
    payload: ProductPayload,
) -> Result<product::Model, ServiceError> {
    payload.validate()?;
    let now = Utc::now();
    let am = product::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        kind: Set(payload.kind),
        stock: Set(payload.stock),
        supplier: Set(payload.supplier),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Full-replace update; id and created_at are preserved, updated_at refreshed.
pub async fn update_product(
    db: &DatabaseConnection,
    id: Uuid,
    payload: ProductPayload,
) -> Result<product::Model, ServiceError> {
    payload.validate()?;
    let mut am: product::ActiveModel = product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("product"))?
        .into();
    am.name = Set(payload.name);
    am.kind = Set(payload.kind);
    am.stock = Set(payload.stock);
    am.supplier = Set(payload.supplier);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete by id. A missing id is a silent no-op; the store cascades the
/// product's orders.
pub async fn delete_product(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    product::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::product::ProductType;

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let name = format!("gear_{}", Uuid::new_v4());
        let p = create_product(
            &db,
            ProductPayload {
                name: name.clone(),
                kind: ProductType::Component,
                stock: 0,
                supplier: "Acme Supply".into(),
            },
        )
        .await?;
        assert_eq!(p.name, name);
        assert_eq!(p.stock, 0);

        let updated = update_product(
            &db,
            p.id,
            ProductPayload {
                name: name.clone(),
                kind: ProductType::Module,
                stock: 25,
                supplier: "Acme Supply".into(),
            },
        )
        .await?;
        assert_eq!(updated.kind, ProductType::Module);
        assert_eq!(updated.stock, 25);
        assert_eq!(updated.created_at, p.created_at);

        delete_product(&db, p.id).await?;
        assert!(!list_products(&db).await?.iter().any(|x| x.id == p.id));
        Ok(())
    }

    #[tokio::test]
    async fn negative_stock_is_rejected_before_any_write() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let name = format!("bad_stock_{}", Uuid::new_v4());
        let res = create_product(
            &db,
            ProductPayload {
                name: name.clone(),
                kind: ProductType::Resource,
                stock: -5,
                supplier: "Acme Supply".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(ServiceError::Invalid(_))));
        assert!(!list_products(&db).await?.iter().any(|x| x.name == name));
        Ok(())
    }
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use models::product;
use service::payloads::ProductPayload;
use service::product_service;

use crate::errors::{self, ErrorResponse};
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<product::Model>>, ErrorResponse> {
    let products = product_service::list_products(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(products))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<product::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let created = product_service::create_product(&state.db, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %created.id, name = %created.name, stock = created.stock, "created product");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<product::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let updated = product_service::update_product(&state.db, id, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %updated.id, "updated product");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ErrorResponse> {
    product_service::delete_product(&state.db, id)
        .await
        .map_err(errors::entity_error)?;
    info!(%id, "deleted product");
    Ok("Product deleted successfully")
}

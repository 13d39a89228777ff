use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use models::manufacturing_order::{self, OrderStatus};
use service::order_service;
use service::payloads::{CreateOrderPayload, UpdateOrderPayload};

use crate::errors::{self, ErrorResponse};
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<manufacturing_order::Model>>, ErrorResponse> {
    let orders = order_service::list_orders(&state.db)
        .await
        .map_err(errors::order_error)?;
    Ok(Json(orders))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<manufacturing_order::Model>, StatusCode> {
    match order_service::get_order(&state.db, id).await {
        Ok(Some(order)) => Ok(Json(order)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderPayload>, JsonRejection>,
) -> Result<Json<manufacturing_order::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let created = order_service::create_order(&state.db, payload)
        .await
        .map_err(errors::order_error)?;
    info!(id = %created.id, project = %created.project, "created manufacturing order");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateOrderPayload>, JsonRejection>,
) -> Result<Json<manufacturing_order::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let updated = order_service::update_order(&state.db, id, payload)
        .await
        .map_err(errors::order_error)?;
    info!(id = %updated.id, "updated manufacturing order");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ErrorResponse> {
    order_service::delete_order(&state.db, id)
        .await
        .map_err(errors::order_error)?;
    info!(%id, "deleted manufacturing order");
    Ok("Manufacturing order deleted successfully.")
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    status: Result<Json<OrderStatus>, JsonRejection>,
) -> Result<Json<manufacturing_order::Model>, ErrorResponse> {
    let Json(status) = status.map_err(errors::bad_body)?;
    let updated = order_service::update_status(&state.db, id, status)
        .await
        .map_err(errors::order_error)?;
    info!(id = %updated.id, status = ?updated.status, "updated manufacturing order status");
    Ok(Json(updated))
}

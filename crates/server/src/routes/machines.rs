use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use models::machine;
use service::machine_service;
use service::payloads::MachinePayload;

use crate::errors::{self, ErrorResponse};
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<machine::Model>>, ErrorResponse> {
    let machines = machine_service::list_machines(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(machines))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MachinePayload>, JsonRejection>,
) -> Result<Json<machine::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let created = machine_service::create_machine(&state.db, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %created.id, name = %created.name, "created machine");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<MachinePayload>, JsonRejection>,
) -> Result<Json<machine::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let updated = machine_service::update_machine(&state.db, id, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %updated.id, "updated machine");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ErrorResponse> {
    machine_service::delete_machine(&state.db, id)
        .await
        .map_err(errors::entity_error)?;
    info!(%id, "deleted machine");
    Ok("Machine deleted successfully")
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use models::employee;
use service::employee_service;
use service::payloads::EmployeePayload;

use crate::errors::{self, ErrorResponse};
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<employee::Model>>, ErrorResponse> {
    let employees = employee_service::list_employees(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(employees))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<employee::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let created = employee_service::create_employee(&state.db, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %created.id, name = %created.name, machine_id = %created.machine_id, "created employee");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<employee::Model>, ErrorResponse> {
    let Json(payload) = payload.map_err(errors::bad_body)?;
    let updated = employee_service::update_employee(&state.db, id, payload)
        .await
        .map_err(errors::entity_error)?;
    info!(id = %updated.id, "updated employee");
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ErrorResponse> {
    employee_service::delete_employee(&state.db, id)
        .await
        .map_err(errors::entity_error)?;
    info!(%id, "deleted employee");
    Ok("Employee deleted successfully")
}

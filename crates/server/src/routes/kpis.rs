use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use service::kpi_service;

use crate::errors::{self, ErrorResponse};
use crate::routes::AppState;

pub async fn orders_status_count(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i64>>, ErrorResponse> {
    let counts = kpi_service::orders_status_count(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(counts))
}

pub async fn machine_status_count(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i64>>, ErrorResponse> {
    let counts = kpi_service::machine_status_count(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(counts))
}

pub async fn product_stock_alerts(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i32>>, ErrorResponse> {
    let alerts = kpi_service::product_stock_alerts(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(alerts))
}

pub async fn employee_workload(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i64>>, ErrorResponse> {
    let workload = kpi_service::employee_workload(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(workload))
}

pub async fn orders_trend(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, i64>>, ErrorResponse> {
    let trend = kpi_service::orders_trend(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(trend))
}

pub async fn machine_utilization(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, f64>>, ErrorResponse> {
    let utilization = kpi_service::machine_utilization(&state.db)
        .await
        .map_err(errors::entity_error)?;
    Ok(Json(utilization))
}
